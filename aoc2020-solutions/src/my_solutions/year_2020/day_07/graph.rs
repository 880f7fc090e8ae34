//! Bag containment graph.
//!
//! Forward edges (`container -> (quantity, child)`) come straight from the
//! rules; parent sets are derived from them once, right after building.
//! Nested-item counts are memoized in a [`DpCache`] owned by the graph, so
//! the memo lives and dies with the graph it describes.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::utils::dp_cache::{DpCache, DpError, DpProblem, VecBackend};

/// Dense id of an interned bag label
pub type NodeId = usize;

/// One parsed rule: `container` directly holds each `(quantity, child)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub container: String,
    pub contents: Vec<(u64, String)>,
}

impl Relation {
    pub fn new(container: impl Into<String>, contents: Vec<(u64, String)>) -> Self {
        Self {
            container: container.into(),
            contents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("bag '{label}' is part of a containment cycle")]
    Cycle { label: String },
    #[error("number of bags inside '{label}' does not fit in 64 bits")]
    Overflow { label: String },
}

/// Forward adjacency, indexed by node id. Also the memo's problem definition:
/// a bag depends on the bags it directly holds.
#[derive(Debug, Default)]
pub struct Contents {
    edges: Vec<Vec<(u64, NodeId)>>,
}

impl Contents {
    pub fn of(&self, id: NodeId) -> &[(u64, NodeId)] {
        self.edges.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

impl DpProblem<NodeId, Option<u64>> for Contents {
    fn deps(&self, id: &NodeId) -> Vec<NodeId> {
        self.of(*id).iter().map(|&(_, child)| child).collect()
    }

    /// `Σ quantity × (1 + inside(child))`, `None` once anything overflows
    fn compute(&self, id: &NodeId, deps: Vec<Option<u64>>) -> Option<u64> {
        self.of(*id)
            .iter()
            .zip(deps)
            .try_fold(0u64, |total, (&(quantity, _), inside)| {
                let per_child = inside?.checked_add(1)?;
                total.checked_add(quantity.checked_mul(per_child)?)
            })
    }
}

/// Bag containment graph built once from the full rule list.
#[derive(Debug)]
pub struct Graph {
    ids: HashMap<String, NodeId>,
    labels: Vec<String>,
    parents: Vec<BTreeSet<NodeId>>,
    nested: DpCache<NodeId, Option<u64>, VecBackend<Option<u64>>, Contents>,
}

impl Graph {
    /// Build forward edges in rule order, then derive parent sets.
    ///
    /// A container listed twice keeps the contents of its last rule. Bags
    /// that only ever appear as contents become leaves.
    pub fn build<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = Relation>,
    {
        let mut ids = HashMap::new();
        let mut labels = Vec::new();
        let mut edges: Vec<Vec<(u64, NodeId)>> = Vec::new();

        let mut intern = |label: String| -> NodeId {
            *ids.entry(label).or_insert_with_key(|label| {
                labels.push(label.clone());
                labels.len() - 1
            })
        };

        for relation in relations {
            let container = intern(relation.container);
            let children: Vec<_> = relation
                .contents
                .into_iter()
                .map(|(quantity, child)| (quantity, intern(child)))
                .collect();
            if edges.len() <= container {
                edges.resize_with(container + 1, Vec::new);
            }
            edges[container] = children;
        }
        edges.resize_with(labels.len(), Vec::new);

        let mut parents = vec![BTreeSet::new(); labels.len()];
        for (container, children) in edges.iter().enumerate() {
            for &(_, child) in children {
                parents[child].insert(container);
            }
        }

        let contents = Contents { edges };
        tracing::debug!(
            bags = labels.len(),
            edges = contents.edge_count(),
            "built containment graph"
        );

        Self {
            ids,
            labels,
            parents,
            nested: DpCache::with_problem(VecBackend::new(), contents),
        }
    }

    /// Number of distinct bag labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id]
    }

    /// Direct contents of `label`, in rule order; empty for leaves and unknown labels
    pub fn contents(&self, label: &str) -> Vec<(u64, &str)> {
        self.id(label)
            .map(|id| {
                self.nested
                    .problem()
                    .of(id)
                    .iter()
                    .map(|&(quantity, child)| (quantity, self.label(child)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bags that directly hold `label`
    pub fn parents(&self, label: &str) -> BTreeSet<&str> {
        self.id(label)
            .map(|id| self.parents[id].iter().map(|&p| self.label(p)).collect())
            .unwrap_or_default()
    }

    /// Every bag that can eventually hold `target`, excluding `target` itself
    pub fn ancestors(&self, target: &str) -> BTreeSet<&str> {
        let Some(start) = self.id(target) else {
            return BTreeSet::new();
        };

        let mut seen = vec![false; self.labels.len()];
        seen[start] = true;
        let mut queue: Vec<NodeId> = self.parents[start].iter().copied().collect();
        let mut found = BTreeSet::new();

        while let Some(id) = queue.pop() {
            if std::mem::replace(&mut seen[id], true) {
                continue;
            }
            found.insert(self.label(id));
            queue.extend(self.parents[id].iter().copied().filter(|&p| !seen[p]));
        }
        found
    }

    /// How many distinct bags can eventually hold `target`
    pub fn count_ancestors(&self, target: &str) -> usize {
        self.ancestors(target).len()
    }

    /// Total bags inside one `target` bag, counting every nesting level.
    ///
    /// Unknown labels hold nothing. Each label's total is computed once per
    /// graph and reused by later queries.
    pub fn count_nested_items(&self, target: &str) -> Result<u64, GraphError> {
        let Some(id) = self.id(target) else {
            return Ok(0);
        };

        let total = self.nested.get(&id).map_err(|DpError::Cycle(at)| GraphError::Cycle {
            label: self.label(at).to_string(),
        })?;
        tracing::debug!(
            bag = target,
            computed = self.nested.computations(),
            cached = self.nested.cached(),
            "nested item memo"
        );

        total.ok_or_else(|| GraphError::Overflow {
            label: self.label(self.overflow_origin(id)).to_string(),
        })
    }

    /// Deepest bag under `id` whose own total overflowed while all of its
    /// contents fit. Only called once `id` has been resolved, so every bag
    /// below it is cached and the walk cannot hit a cycle.
    fn overflow_origin(&self, mut id: NodeId) -> NodeId {
        while let Some(child) = self
            .nested
            .problem()
            .of(id)
            .iter()
            .map(|&(_, child)| child)
            .find(|child| matches!(self.nested.get(child), Ok(None)))
        {
            id = child;
        }
        id
    }

    /// How many per-label totals the memo has computed so far
    pub fn memo_computations(&self) -> usize {
        self.nested.computations()
    }
}

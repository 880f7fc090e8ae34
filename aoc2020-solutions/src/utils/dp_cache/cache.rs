//! Single-threaded DP cache implementation.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use thiserror::Error;

use super::backend::Backend;
use super::problem::DpProblem;

/// Errors raised while resolving a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError<I> {
    /// The index depends on itself, directly or transitively.
    #[error("dependency cycle through {0:?}")]
    Cycle(I),
}

/// Work item of the explicit resolution stack.
enum Frame<I> {
    /// Look at an index for the first time and schedule its dependencies.
    Enter(I),
    /// All dependencies are cached; compute the index itself.
    Exit(I, Vec<I>),
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Dependencies are resolved with an explicit post-order stack rather than
/// recursion, so long dependency chains cannot overflow the call stack. Each
/// index is computed at most once for the lifetime of the cache.
///
/// A cycle in the dependency graph is reported as [`DpError::Cycle`]; nothing
/// is cached for the indices on the cycle.
///
/// # Example
///
/// ```rust
/// use aoc2020_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Factorial);
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// assert_eq!(cache.computations(), 6);
/// ```
#[derive(Debug)]
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    computations: Cell<usize>,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            computations: Cell::new(0),
            _phantom: PhantomData,
        }
    }

    /// The problem definition this cache evaluates.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// How many times `compute` has run so far.
    pub fn computations(&self) -> usize {
        self.computations.get()
    }

    /// Number of indices with a cached value.
    pub fn cached(&self) -> usize {
        self.backend.borrow().len()
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// Uncached dependencies are resolved first, deepest first; every value
    /// computed along the way is cached for later calls.
    pub fn get(&self, index: &I) -> Result<K, DpError<I>> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        let mut in_progress: HashSet<I> = HashSet::new();
        let mut stack = vec![Frame::Enter(index.clone())];
        let mut last = None;

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(current) => {
                    if self.backend.borrow().get(&current).is_some() {
                        continue;
                    }
                    in_progress.insert(current.clone());

                    let deps = self.problem.deps(&current);
                    let pending: Vec<I> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .filter(|dep| backend.get(dep).is_none())
                            .cloned()
                            .collect()
                    };
                    if let Some(dep) = pending.iter().find(|dep| in_progress.contains(*dep)) {
                        return Err(DpError::Cycle(dep.clone()));
                    }

                    stack.push(Frame::Exit(current, deps));
                    stack.extend(pending.into_iter().rev().map(Frame::Enter));
                }
                Frame::Exit(current, deps) => {
                    let values: Vec<K> = {
                        let backend = self.backend.borrow();
                        deps.iter()
                            .map(|dep| backend.get(dep).cloned())
                            .collect::<Option<_>>()
                            .ok_or_else(|| DpError::Cycle(current.clone()))?
                    };
                    let value = self.problem.compute(&current, values);
                    self.computations.set(self.computations.get() + 1);
                    in_progress.remove(&current);

                    last = Some(self.backend.borrow_mut().get_or_insert(current, value).clone());
                }
            }
        }

        // the root's exit frame sits at the bottom of the stack, so it is popped last
        last.ok_or_else(|| DpError::Cycle(index.clone()))
    }
}

//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// Implementations pick the data structure (Vec, HashMap, ...) that suits
/// the index type. A stored value is never overwritten.
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Stores `value` for `index` unless a value is already present, and
    /// returns the stored value.
    fn get_or_insert(&mut self, index: I, value: K) -> &K;

    /// Number of cached values.
    fn len(&self) -> usize;

    /// Whether nothing has been cached yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for dense `usize` indices (e.g. interned node ids).
///
/// The Vec grows on demand to accommodate new indices.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    /// Creates a new VecBackend with room for `capacity` indices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            filled: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert(&mut self, index: usize, value: K) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        let slot = &mut self.data[index];
        if slot.is_none() {
            self.filled += 1;
        }
        slot.get_or_insert(value)
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, value: K) -> &K {
        self.data.entry(index).or_insert(value)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

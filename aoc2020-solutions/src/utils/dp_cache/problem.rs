//! Trait-based DP problem definition.

/// Defines the dependency structure and per-index computation of a DP problem.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use aoc2020_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// /// Bags in a chain where each holds two of the next one.
/// struct DoublingChain {
///     depth: usize,
/// }
///
/// impl DpProblem<usize, u64> for DoublingChain {
///     fn deps(&self, level: &usize) -> Vec<usize> {
///         if *level + 1 < self.depth { vec![level + 1] } else { vec![] }
///     }
///
///     fn compute(&self, _level: &usize, deps: Vec<u64>) -> u64 {
///         deps.iter().map(|inner| 2 * (1 + inner)).sum()
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), DoublingChain { depth: 7 });
/// assert_eq!(cache.get(&0).unwrap(), 126);
/// ```
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

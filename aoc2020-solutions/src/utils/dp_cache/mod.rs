//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for computations where values depend on other values in a
//! directed acyclic graph, such as the number of bags nested inside a bag.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing), e.g. interned node ids
//! - [`HashMapBackend`]: arbitrary hashable index types
//!
//! # Cycles
//!
//! Dependencies are expected to form a DAG. A cycle is detected during
//! resolution and reported as [`DpError::Cycle`] instead of recursing
//! forever.
//!
//! # Example
//!
//! ```rust
//! use aoc2020_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<u32, u64> for Fibonacci {
//!     fn deps(&self, n: &u32) -> Vec<u32> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &u32, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&90).unwrap(), 2_880_067_194_370_816_120);
//! assert_eq!(cache.computations(), 91);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpError};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;

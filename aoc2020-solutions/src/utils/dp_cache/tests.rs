//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

#[test]
fn test_single_values_without_dependencies() {
    let cache = DpCache::with_problem(VecBackend::new(), NoDeps);

    assert_eq!(cache.get(&5).unwrap(), 10);
    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&100).unwrap(), 200);
    assert_eq!(cache.cached(), 3);
}

/// Diamond: 0 depends on 1 and 2, both depend on 3
struct Diamond {
    count: Rc<Cell<i32>>,
}

impl DpProblem<usize, i32> for Diamond {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match *n {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
        self.count.set(self.count.get() + 1);
        match *n {
            0 => deps[0] + deps[1],
            1 => deps[0] * 2,
            2 => deps[0] * 3,
            3 => 10,
            _ => 0,
        }
    }
}

#[test]
fn test_diamond_dependency_memoization() {
    let compute_count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: compute_count.clone(),
        },
    );

    // D=10, B=20, C=30, A=50
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(compute_count.get(), 4);
    assert_eq!(cache.computations(), 4);

    // Already cached, nothing recomputed
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(cache.get(&3).unwrap(), 10);
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_dependency_order_is_preserved() {
    // compute receives dep values in the order deps() listed them
    struct Ordered;

    impl DpProblem<usize, Vec<usize>> for Ordered {
        fn deps(&self, n: &usize) -> Vec<usize> {
            if *n == 0 { vec![3, 1, 2] } else { vec![] }
        }

        fn compute(&self, n: &usize, deps: Vec<Vec<usize>>) -> Vec<usize> {
            if *n == 0 { deps.concat() } else { vec![*n] }
        }
    }

    let cache = DpCache::with_problem(VecBackend::new(), Ordered);
    assert_eq!(cache.get(&0).unwrap(), vec![3, 1, 2]);
}

/// Chain n -> n+1 -> ... -> len-1
struct Chain {
    len: usize,
}

impl DpProblem<usize, u64> for Chain {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if n + 1 < self.len { vec![n + 1] } else { vec![] }
    }

    fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_deep_chain_does_not_overflow_the_stack() {
    let cache = DpCache::with_problem(VecBackend::with_capacity(200_000), Chain { len: 200_000 });
    assert_eq!(cache.get(&0).unwrap(), 199_999);
    assert_eq!(cache.computations(), 200_000);
}

#[test]
fn test_partially_cached_chain_only_computes_the_rest() {
    let cache = DpCache::with_problem(VecBackend::new(), Chain { len: 10 });
    assert_eq!(cache.get(&5).unwrap(), 4);
    assert_eq!(cache.computations(), 5);
    assert_eq!(cache.get(&0).unwrap(), 9);
    assert_eq!(cache.computations(), 10);
}

/// Exponentially many paths: n depends on n+1 twice
struct Doubling {
    len: usize,
}

impl DpProblem<usize, u64> for Doubling {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if n + 1 < self.len { vec![n + 1, n + 1] } else { vec![] }
    }

    fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
        deps.iter().map(|d| d + 1).sum()
    }
}

#[test]
fn test_exponential_path_count_is_linear_work() {
    let cache = DpCache::with_problem(VecBackend::new(), Doubling { len: 40 });
    // f(39) = 0, f(n) = 2 (f(n+1) + 1)  =>  f(0) = 2^40 - 2
    assert_eq!(cache.get(&0).unwrap(), (1u64 << 40) - 2);
    assert_eq!(cache.computations(), 40);
}

#[test]
fn test_cycle_is_reported() {
    struct Loop;

    impl DpProblem<&'static str, u32> for Loop {
        fn deps(&self, n: &&'static str) -> Vec<&'static str> {
            match *n {
                "a" => vec!["b"],
                "b" => vec!["c"],
                "c" => vec!["a"],
                _ => vec![],
            }
        }

        fn compute(&self, _n: &&'static str, deps: Vec<u32>) -> u32 {
            deps.iter().sum::<u32>() + 1
        }
    }

    let cache = DpCache::with_problem(HashMapBackend::new(), Loop);
    assert_eq!(cache.get(&"a"), Err(DpError::Cycle("a")));
    assert_eq!(cache.get(&"z").unwrap(), 1);
}

#[test]
fn test_self_dependency_is_a_cycle() {
    struct SelfLoop;

    impl DpProblem<usize, u32> for SelfLoop {
        fn deps(&self, n: &usize) -> Vec<usize> {
            vec![*n]
        }

        fn compute(&self, _n: &usize, _deps: Vec<u32>) -> u32 {
            0
        }
    }

    let cache = DpCache::with_problem(VecBackend::new(), SelfLoop);
    assert_eq!(cache.get(&7), Err(DpError::Cycle(7)));
    assert_eq!(cache.cached(), 0);
}

#[test]
fn test_vec_backend_get_or_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();

    assert_eq!(*backend.get_or_insert(5, 42), 42);
    // an existing value is kept
    assert_eq!(*backend.get_or_insert(5, 999), 42);

    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&4), None);
    assert_eq!(backend.get(&10), None);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, u64> = HashMapBackend::new();
    assert!(backend.is_empty());

    assert_eq!(*backend.get_or_insert("shiny gold".to_string(), 32), 32);
    assert_eq!(*backend.get_or_insert("shiny gold".to_string(), 0), 32);
    assert_eq!(backend.get(&"shiny gold".to_string()), Some(&32));
    assert_eq!(backend.len(), 1);
}

//! Property tests for range-checked part dispatch and solver instances

use aoc_solver::{
    AocParser, DynSolver, ParseError, SolveError, Solver, SolverExt, SolverInstance,
};
use chrono::TimeDelta;
use proptest::prelude::*;

/// Counts seat rows; answers every part with the part number and row count
struct RowSolver<const N: u8>;

impl<const N: u8> AocParser for RowSolver<N> {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl<const N: u8> Solver for RowSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}:{}", part, shared.len()))
    }
}

fn checked(max_parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    let mut shared = vec!["L.L", "#.#"];
    match max_parts {
        1 => (1, RowSolver::<1>::solve_part_checked_range(&mut shared, part)),
        2 => (2, RowSolver::<2>::solve_part_checked_range(&mut shared, part)),
        _ => (3, RowSolver::<3>::solve_part_checked_range(&mut shared, part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn out_of_range_parts_are_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let (effective_max, result) = checked(max_parts, part);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}:2", part));
        }
    }

    #[test]
    fn instance_solves_match_direct_dispatch(rows in 1usize..20, part in 1u8..=2) {
        let input = vec!["L.#"; rows].join("\n");
        let mut instance = SolverInstance::<RowSolver<2>>::new(2020, 11, &input).unwrap();

        let mut shared = RowSolver::<2>::parse(&input).unwrap();
        let direct = RowSolver::<2>::solve_part(&mut shared, part).unwrap();

        let result = instance.solve(part).unwrap();
        prop_assert_eq!(result.part, part);
        prop_assert_eq!(&result.answer, &direct);
        prop_assert!(result.duration >= TimeDelta::zero());
    }
}

#[test]
fn instance_reports_identity_and_parse_timing() {
    let instance = SolverInstance::<RowSolver<2>>::new(2020, 7, "a\nb").unwrap();
    assert_eq!(instance.year(), 2020);
    assert_eq!(instance.day(), 7);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_duration() >= TimeDelta::zero());
}

#[test]
fn instance_parse_errors_are_returned_unchanged() {
    struct Rejecting;

    impl AocParser for Rejecting {
        type SharedData<'a> = ();

        fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Err(ParseError::MissingData("no seats".into()))
        }
    }

    impl Solver for Rejecting {
        const PARTS: u8 = 1;

        fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            Err(SolveError::PartNotImplemented(part))
        }
    }

    assert_eq!(
        SolverInstance::<Rejecting>::new(2020, 11, "").err(),
        Some(ParseError::MissingData("no seats".into()))
    );
}

#[test]
fn instance_carries_part_failures_through() {
    let mut instance = SolverInstance::<RowSolver<1>>::new(2020, 11, "L").unwrap();
    assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
    assert_eq!(instance.solve(1).unwrap().answer, "part1:1");
}

//! Parsed solver instances with timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Answer for one part and how long it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// The part this answer belongs to
    pub part: u8,
    /// The answer string
    pub answer: String,
    /// Wall-clock time spent in the part solver
    pub duration: TimeDelta,
}

/// Run `f`, returning its output with the elapsed wall-clock time
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let output = f();
    (output, Utc::now() - start)
}

/// A parsed puzzle for one year/day, ready to have its parts solved.
///
/// Input is parsed exactly once, in [`SolverInstance::new`]; every part then
/// runs against the same shared data, so whatever part 1 caches there (a
/// built graph, a memo table) is still available to part 2.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long parsing took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_duration,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry can hand out
/// solvers of different types behind one `Box<dyn DynSolver>`.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("result part{}: {}", result.part, result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, timing the call
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Time spent parsing the input
    fn parse_duration(&self) -> TimeDelta;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver answers
    fn parts(&self) -> u8;
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, duration) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            duration,
        })
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

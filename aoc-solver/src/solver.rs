//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data every part works on.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct SeatCount;
///
/// impl AocParser for SeatCount {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         if input.trim().is_empty() {
///             return Err(ParseError::MissingData("no rows".into()));
///         }
///         Ok(input.lines().collect())
///     }
/// }
///
/// assert_eq!(SeatCount::parse("L.L\n#.#").unwrap().len(), 2);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results shared between parts.
    ///
    /// Owned types work for anything that needs transformation; `&'a str`
    /// slices keep parsing zero-copy.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// The const generic gives each part its own impl, so a missing part is a
/// compile error inside the `AocSolver` derive rather than a runtime surprise.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct SeatCount;
///
/// impl AocParser for SeatCount {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for SeatCount {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.chars().filter(|&c| c == '#').count().to_string())
///     }
/// }
///
/// let mut shared = SeatCount::parse("#.L\n##L").unwrap();
/// assert_eq!(<SeatCount as PartSolver<1>>::solve(&mut shared).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using (and possibly caching into) the shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year/day puzzle.
///
/// Usually generated by `#[derive(AocSolver)]`, which dispatches each part
/// number to the matching [`PartSolver`] impl.
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - The kernel rejected the input
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`
    /// with `SolveError::PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

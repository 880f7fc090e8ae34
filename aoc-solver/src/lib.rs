//! Advent of Code Solver Library
//!
//! The framework the 2020 seating-system and haversack solvers plug into.
//! Each puzzle is a type that parses its input once and answers one or more
//! parts against the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] ties the parts together (normally via `#[derive(AocSolver)]`)
//! - [`SolverInstance`] / [`DynSolver`] hold a parsed puzzle and time each part
//! - [`SolverRegistry`] maps (year, day) to solver factories, filled either by
//!   hand or from [`SolverPlugin`]s submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Seats;
//!
//! impl AocParser for Seats {
//!     type SharedData<'a> = Vec<&'a str>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Seats {
//!     fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(rows.iter().map(|r| r.matches('#').count()).sum::<usize>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Seats {
//!     fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(rows.iter().map(|r| r.matches('L').count()).sum::<usize>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Seats>(2020, 11)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2020, 11, "#.L\nLL#").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2020, day = 11, tags = ["grid"])]
//! pub struct Solver;
//! ```
//!
//! Any binary that links the crate defining `Solver` then sees it through
//! [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be read
    #[error("cannot read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No solver is linked for the requested puzzle
    #[error("no solver registered for {year}/{day:02}")]
    NotRegistered { year: u16, day: u8 },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Writing answers to stdout failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),
}

impl From<aoc_solver::SolveError> for CliError {
    fn from(e: aoc_solver::SolveError) -> Self {
        CliError::Solver(e.into())
    }
}

//! Configuration resolution from CLI args

use crate::cli::Args;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Every puzzle this tool runs belongs to one event
pub const YEAR: u16 = 2020;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day
    pub day: u8,
    /// Parts to solve, in order
    pub parts: RangeInclusive<u8>,
    /// Input file to read
    pub input: PathBuf,
}

impl Config {
    /// Build the run configuration for `day` from parsed args
    pub fn from_args(args: Args, day: u8) -> Self {
        Config {
            year: YEAR,
            day,
            parts: 1..=2,
            input: args.input,
        }
    }
}

//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Solve both parts of one Advent of Code 2020 puzzle
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Args {
    /// Puzzle input file
    pub input: PathBuf,
}

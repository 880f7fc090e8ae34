//! Day 7: `day07 <INPUT>`

// Link the solutions crate so its plugins are submitted
use aoc2020_solutions as _;

use std::process::ExitCode;

fn main() -> ExitCode {
    aoc2020_cli::main_for(7)
}

//! Command-line runner shared by the `day07` and `day11` binaries
//!
//! Each binary hands its day number to [`main_for`]; everything else
//! (argument parsing, logging setup, registry lookup, output) lives here.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod output;

// Link the solutions crate so its plugins are submitted
use aoc2020_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Solve every configured part of one puzzle
pub fn run(config: &Config) -> Result<Vec<SolverResult>, CliError> {
    Executor::for_puzzle(config.year, config.day)?.execute(config)
}

/// Entry point of a per-day binary
pub fn main_for(day: u8) -> ExitCode {
    init_logging();
    let config = Config::from_args(Args::parse(), day);

    let outcome = run(&config)
        .and_then(|results| Ok(output::write_results(std::io::stdout().lock(), &results)?));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

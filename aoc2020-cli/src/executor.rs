//! Sequential executor for one puzzle

use crate::config::Config;
use crate::error::CliError;
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use chrono::TimeDelta;

/// Answer for a single part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    pub solve_duration: TimeDelta,
}

/// Runs the parts named by a [`Config`] against a registry
pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    /// Create an executor over an already built registry
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    /// Create an executor holding only the linked plugin for `year`/`day`
    pub fn for_puzzle(year: u16, day: u8) -> Result<Self, CliError> {
        let registry = SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == year && plugin.day == day)?
            .build();
        Ok(Self::new(registry))
    }

    /// Read the input file, parse it once, then solve each part in order.
    ///
    /// The first failing part aborts the run.
    pub fn execute(&self, config: &Config) -> Result<Vec<SolverResult>, CliError> {
        let info = self
            .registry
            .storage()
            .get_info(config.year, config.day)
            .ok_or(CliError::NotRegistered {
                year: config.year,
                day: config.day,
            })?;

        let input = std::fs::read_to_string(&config.input).map_err(|source| CliError::Input {
            path: config.input.clone(),
            source,
        })?;
        tracing::info!(
            year = config.year,
            day = config.day,
            input = %config.input.display(),
            bytes = input.len(),
            "running solver"
        );

        let mut solver = self.registry.create_solver(config.year, config.day, &input)?;
        tracing::debug!(
            parse_us = solver.parse_duration().num_microseconds(),
            "parsed input"
        );

        config
            .parts
            .clone()
            .filter(|part| *part <= info.parts)
            .map(|part| -> Result<SolverResult, CliError> {
                let result = solver.solve(part)?;
                let solve_duration = result.duration;
                tracing::debug!(part, solve_us = solve_duration.num_microseconds(), "solved part");
                Ok(SolverResult {
                    year: config.year,
                    day: config.day,
                    part,
                    answer: result.answer,
                    solve_duration,
                })
            })
            .collect()
    }
}

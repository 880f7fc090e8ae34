//! Day 11: Seating System

mod seating;

pub use seating::{settle, stabilize, Direction, Grid, Policy, RaggedRow, Seat};

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 11, tags = ["2020", "grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // 1-based line numbers of the original input, blank lines at either end dropped
        let mut lines: Vec<(usize, &str)> = input
            .lines()
            .map(str::trim_end)
            .enumerate()
            .skip_while(|(_, line)| line.is_empty())
            .map(|(line_idx, line)| (line_idx + 1, line))
            .collect();
        while lines.last().is_some_and(|(_, line)| line.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(ParseError::MissingData("seat layout is empty".to_string()));
        }

        let rows = lines
            .iter()
            .map(|&(line_no, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| {
                        Seat::from_char(c)
                            .ok_or_else(|| anyhow!("(line {}, column {}) unexpected '{}'", line_no, col + 1, c))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Grid::from_rows(rows).map_err(|e| {
            let line_no = lines.get(e.row).map_or(e.row + 1, |&(line_no, _)| line_no);
            ParseError::InvalidFormat(format!("(line {}) {}", line_no, e))
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stabilize(shared.clone(), Policy::Adjacency).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stabilize(shared.clone(), Policy::Visibility).to_string())
    }
}

//! Day 7: Handy Haversacks

mod graph;

pub use graph::{Contents, Graph, GraphError, NodeId, Relation};

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

/// The bag every query is about
pub const TARGET: &str = "shiny gold";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 7, tags = ["2020", "graph"])]
pub struct Solver;

/// Compiled patterns for `<label> bags contain <contents>.` rules
#[derive(Clone, Debug)]
pub struct RuleParser {
    rule_regex: Regex,
    content_regex: Regex,
}

impl RuleParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            rule_regex: Regex::new(r"^(.+?) bags contain (.+?)\.?$")?,
            content_regex: Regex::new(r"^(\d+) (.+?) bags?$")?,
        })
    }

    /// Parse one rule line into a relation
    pub fn parse_rule(&self, line: &str) -> anyhow::Result<Relation> {
        let captures = self
            .rule_regex
            .captures(line)
            .ok_or_else(|| anyhow!("expected '<label> bags contain <contents>.'"))?;
        let container = &captures[1];
        let contents = &captures[2];

        if contents == "no other bags" {
            return Ok(Relation::new(container, Vec::new()));
        }

        contents
            .split(", ")
            .map(|item| self.parse_content(item))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|contents| Relation::new(container, contents))
    }

    fn parse_content(&self, item: &str) -> anyhow::Result<(u64, String)> {
        let captures = self
            .content_regex
            .captures(item)
            .ok_or_else(|| anyhow!("expected '<quantity> <label> bag(s)', found '{}'", item))?;
        let quantity: u64 = captures[1]
            .parse()
            .with_context(|| format!("quantity '{}' out of range", &captures[1]))?;
        if quantity == 0 {
            return Err(anyhow!("quantity of '{}' must be at least 1", &captures[2]));
        }
        Ok((quantity, captures[2].to_string()))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Graph;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no bag rules".to_string()));
        }
        let parser = RuleParser::new().map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parser
                    .parse_rule(line)
                    .map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map(Graph::build)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_ancestors(TARGET).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .count_nested_items(TARGET)
            .map(|count| count.to_string())
            .map_err(SolveError::failed)
    }
}

//! Output formatting for solver results

use crate::executor::SolverResult;
use std::io::{self, Write};

/// Format one result as printed on stdout
pub fn format_result(result: &SolverResult) -> String {
    format!("result part{}: {}", result.part, result.answer)
}

/// Write every result, one line each
pub fn write_results<W: Write>(mut out: W, results: &[SolverResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", format_result(result))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn result(part: u8, answer: &str) -> SolverResult {
        SolverResult {
            year: 2020,
            day: 11,
            part,
            answer: answer.to_string(),
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn prints_one_line_per_part() {
        let mut out = Vec::new();
        write_results(&mut out, &[result(1, "37"), result(2, "26")]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "result part1: 37\nresult part2: 26\n");
    }
}

//! End-to-end runs against input files on disk

use aoc2020_cli::config::Config;
use aoc2020_cli::error::CliError;
use aoc2020_cli::run;
use aoc2020_solutions as _;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

const SEATS: &str = "L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

const BAGS: &str = "light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config(day: u8, input: PathBuf) -> Config {
    Config {
        year: 2020,
        day,
        parts: 1..=2,
        input,
    }
}

fn answers(day: u8, contents: &str) -> Vec<(u8, String)> {
    let file = input_file(contents);
    run(&config(day, file.path().to_path_buf()))
        .unwrap()
        .into_iter()
        .map(|result| (result.part, result.answer))
        .collect()
}

#[test]
fn day11_answers_both_parts() {
    assert_eq!(
        answers(11, SEATS),
        vec![(1, "37".to_string()), (2, "26".to_string())]
    );
}

#[test]
fn day07_answers_both_parts() {
    assert_eq!(
        answers(7, BAGS),
        vec![(1, "4".to_string()), (2, "32".to_string())]
    );
}

#[test]
fn missing_input_file_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match run(&config(11, missing.clone())) {
        Err(CliError::Input { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an input error, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn malformed_input_is_a_solver_error() {
    let file = input_file("L.L\nL#X\n");
    assert!(matches!(
        run(&config(11, file.path().to_path_buf())),
        Err(CliError::Solver(aoc_solver::SolverError::ParseError(_)))
    ));
}

#[test]
fn unregistered_day_is_reported() {
    let file = input_file(SEATS);
    assert!(matches!(
        run(&config(12, file.path().to_path_buf())),
        Err(CliError::NotRegistered { year: 2020, day: 12 })
    ));
}

#[test]
fn day11_binary_prints_results() {
    let file = input_file(SEATS);
    let output = Command::new(env!("CARGO_BIN_EXE_day11"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "result part1: 37\nresult part2: 26\n"
    );
}

#[test]
fn day07_binary_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_day07"))
        .arg(dir.path().join("input.txt"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read input"));
}

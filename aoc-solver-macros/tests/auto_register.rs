use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 24, tags = ["macro-test", "grid"])]
struct Floor;

impl AocParser for Floor {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Floor {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches('.').count().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("untagged".to_string())
    }
}

#[test]
fn plugin_is_collected_with_its_metadata() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2019 && p.day == 24)
        .expect("plugin submitted by derive");
    assert_eq!(plugin.tags, &["macro-test", "grid"]);
    assert_eq!(plugin.solver.parts(), 1);
}

#[test]
fn tag_filter_selects_only_matching_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2019, 24));
    assert!(!registry.storage().contains(2019, 25));

    let mut solver = registry.create_solver(2019, 24, "L..#.").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn register_all_includes_untagged_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2019, 25, "").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "untagged");
}

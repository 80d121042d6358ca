use assert_cmd::Command;
use predicates::prelude::predicate::str;

fn cmd() -> Command {
	Command::cargo_bin("clumsy-crucible").unwrap()
}

#[test]
fn both_parts_output_right_answers() {
	cmd().arg("inputs/example.txt")
		.assert().success().stdout("part 1: 102, part 2: 94\n");
}

#[test]
fn run_limits_output_single_answer() {
	cmd().args(["inputs/example.txt", "--min-run", "1", "--max-run", "3"])
		.assert().success().stdout("102\n");
	cmd().args(["inputs/example.txt", "--min-run", "4", "--max-run", "10", "--engine", "frontier"])
		.assert().success().stdout("94\n");
}

#[test]
fn route_is_drawn_over_grid() {
	cmd().args(["inputs/unfortunate.txt", "--min-run", "4", "--max-run", "10", "--route"])
		.assert().success()
		.stdout(str::starts_with("71\n1>>>>>>>1111\n"))
		.stdout(str::contains("9999999v>>>>"));
	cmd().args(["inputs/unfortunate.txt", "--min-run", "4", "--max-run", "10", "--route",
		"--engine", "frontier"])
		.assert().failure().stderr(str::contains("heap engine"));
}

#[test]
fn failures_are_reported() {
	cmd().args(["inputs/example.txt", "--min-run", "14", "--max-run", "20"])
		.assert().failure().stderr(str::contains("No path"));
	cmd().args(["inputs/example.txt", "--min-run", "4", "--max-run", "3"])
		.assert().failure().stderr(str::contains("exceeds maximum"));
	cmd().args(["inputs/example.txt", "--min-run", "4"])
		.assert().failure();
	cmd().args(["inputs/example.txt", "--engine", "frontier", "--max-rounds", "3"])
		.assert().failure().stderr(str::contains("Gave up after 3 round(s)"));
	cmd().arg("inputs/garbled.txt")
		.assert().failure().stderr(str::contains("line 2, column 3"));
	cmd().arg("inputs/missing.txt")
		.assert().failure().stderr(str::contains("Failed to open"));
}

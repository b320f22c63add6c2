use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub const STUDENT: &str = "u0000001";

/// Class flags for the fixture class
pub const CS3500: [&str; 8] = [
    "--subject", "CS", "--number", "3500", "--season", "Spring", "--year", "2024",
];

/// Get a Command for gradebook
pub fn gradebook() -> Command {
    cargo_bin_cmd!("gradebook")
}

/// Run a command in `dir` and assert success
pub fn run(dir: &Path, args: &[&str]) {
    gradebook().current_dir(dir).args(args).assert().success();
}

/// Run a command with `--format json` and parse stdout
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = gradebook()
        .current_dir(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Run a class-scoped command, appending the fixture class flags
pub fn class_args<'a>(command: &[&'a str], rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = command.to_vec();
    args.extend(CS3500);
    args.extend_from_slice(rest);
    args
}

/// Store with CS 3500 Spring 2024: Homework (60) with HW1, Exams (40) with
/// Midterm, both worth 100 points, and one enrolled student
pub fn setup_class(dir: &Path) {
    run(dir, &["init"]);
    run(dir, &["department", "add", "CS", "Computer Science"]);
    run(dir, &["course", "add", "CS", "3500", "Software Practice"]);
    run(dir, &class_args(&["class", "add"], &["--location", "WEB L104"]));
    run(dir, &class_args(&["category", "add"], &["Homework", "--weight", "60"]));
    run(dir, &class_args(&["category", "add"], &["Exams", "--weight", "40"]));
    run(
        dir,
        &class_args(
            &["assignment", "add"],
            &["--category", "Homework", "HW1", "--points", "100", "--due", "2024-02-01"],
        ),
    );
    run(
        dir,
        &class_args(
            &["assignment", "add"],
            &["--category", "Exams", "Midterm", "--points", "100"],
        ),
    );
    run(dir, &class_args(&["enroll"], &["--student", STUDENT]));
}

/// Score an assignment for the fixture student
pub fn score(dir: &Path, category: &str, assignment: &str, points: &str) -> serde_json::Value {
    run_json(
        dir,
        &class_args(
            &["score"],
            &[
                "--category",
                category,
                "--assignment",
                assignment,
                "--student",
                STUDENT,
                "--score",
                points,
            ],
        ),
    )
}

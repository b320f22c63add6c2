use crate::cli::support::{gradebook, run, run_json, score, setup_class, STUDENT};
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::tempdir;

/// Add CS 3810 Fall 2024 with a single 100 point exam and enroll the student
fn setup_second_class(dir: &std::path::Path) -> [&'static str; 8] {
    let class = [
        "--subject", "CS", "--number", "3810", "--season", "Fall", "--year", "2024",
    ];
    run(dir, &["course", "add", "CS", "3810", "Computer Organization"]);

    let mut add = vec!["class", "add"];
    add.extend(class);
    run(dir, &add);

    let mut category = vec!["category", "add"];
    category.extend(class);
    category.extend(["Exams", "--weight", "100"]);
    run(dir, &category);

    let mut assignment = vec!["assignment", "add"];
    assignment.extend(class);
    assignment.extend(["--category", "Exams", "Final", "--points", "100"]);
    run(dir, &assignment);

    let mut enroll = vec!["enroll"];
    enroll.extend(class);
    enroll.extend(["--student", STUDENT]);
    run(dir, &enroll);

    class
}

fn score_final(dir: &std::path::Path, class: [&str; 8], points: &str) {
    let mut args = vec!["score"];
    args.extend(class);
    args.extend([
        "--category", "Exams", "--assignment", "Final", "--student", STUDENT, "--score", points,
    ]);
    run(dir, &args);
}

// ============================================================================
// GPA command tests
// ============================================================================

#[test]
fn test_gpa_averages_graded_classes() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    let second = setup_second_class(dir.path());

    score(dir.path(), "Homework", "HW1", "100");
    score(dir.path(), "Exams", "Midterm", "100");
    score_final(dir.path(), second, "85");

    gradebook()
        .current_dir(dir.path())
        .args(["gpa", "--student", STUDENT])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "GPA for u0000001: 3.50 (2 graded, 0 ungraded)",
        ));
}

#[test]
fn test_gpa_skips_ungraded_classes() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    setup_second_class(dir.path());

    score(dir.path(), "Homework", "HW1", "100");
    score(dir.path(), "Exams", "Midterm", "100");

    let json = run_json(dir.path(), &["gpa", "--student", STUDENT]);
    assert_eq!(json["gpa"], 4.0);
    assert_eq!(json["counted"], 1);
    assert_eq!(json["excluded"], 1);
}

#[test]
fn test_gpa_skips_legacy_labels() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    setup_second_class(dir.path());
    score(dir.path(), "Homework", "HW1", "100");
    score(dir.path(), "Exams", "Midterm", "90");

    // Grades imported from an older system may carry withdrawal marks
    let conn = Connection::open(dir.path().join(".gradebook/gradebook.db")).unwrap();
    let updated = conn
        .execute(
            "UPDATE enrollments SET grade = 'WF' WHERE class_id = (
                 SELECT cl.id FROM classes cl JOIN courses co ON co.id = cl.course_id
                 WHERE co.number = 3810)",
            [],
        )
        .unwrap();
    assert_eq!(updated, 1);
    drop(conn);

    let json = run_json(dir.path(), &["gpa", "--student", STUDENT]);
    assert_eq!(json["gpa"], 4.0);
    assert_eq!(json["counted"], 1);
    assert_eq!(json["excluded"], 1);
}

#[test]
fn test_gpa_without_enrollments_is_zero() {
    let dir = tempdir().unwrap();
    run(dir.path(), &["init"]);

    let json = run_json(dir.path(), &["gpa", "--student", "u0000002"]);
    assert_eq!(json["gpa"], 0.0);
    assert_eq!(json["counted"], 0);
    assert_eq!(json["excluded"], 0);
}

#[test]
fn test_gpa_records_output() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "100");
    score(dir.path(), "Exams", "Midterm", "100");

    gradebook()
        .current_dir(dir.path())
        .args(["--format", "records", "gpa", "--student", STUDENT])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H gradebook=1 records=1 mode=gpa student=u0000001 gpa=4.00 counted=1 excluded=0",
        ));
}

// ============================================================================
// Classes command tests
// ============================================================================

#[test]
fn test_classes_marks_ungraded_enrollments() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    let json = run_json(dir.path(), &["classes", "--student", STUDENT]);
    let classes = json.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["subject"], "CS");
    assert_eq!(classes[0]["number"], 3500);
    assert_eq!(classes[0]["name"], "Software Practice");
    assert_eq!(classes[0]["grade"], "--");
}

#[test]
fn test_classes_human_output() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "100");
    score(dir.path(), "Exams", "Midterm", "70");

    gradebook()
        .current_dir(dir.path())
        .args(["classes", "--student", STUDENT])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS 3500 Spring 2024"))
        .stdout(predicate::str::contains("B"));
}

#[test]
fn test_classes_uses_configured_marker() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    std::fs::write(
        dir.path().join(".gradebook/config.toml"),
        "version = 1\n\n[display]\nno_grade_marker = \"n/a\"\n",
    )
    .unwrap();

    gradebook()
        .current_dir(dir.path())
        .args(["--format", "records", "classes", "--student", STUDENT])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "E class=\"CS 3500 Spring 2024\" name=\"Software Practice\" grade=n/a",
        ));
}

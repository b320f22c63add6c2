use crate::cli::support::{class_args, gradebook, run, run_json, score, setup_class, STUDENT};
use predicates::prelude::*;
use tempfile::tempdir;

fn assert_percentage(outcome: &serde_json::Value, expected: f64) {
    let actual = outcome["percentage"].as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}%, got {actual}%"
    );
}

fn stored_grade(dir: &std::path::Path) -> serde_json::Value {
    let classes = run_json(dir, &["classes", "--student", STUDENT]);
    classes[0]["grade"].clone()
}

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_recomputes_weighted_grade() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    // Midterm has no submission yet and counts as zero
    let first = score(dir.path(), "Homework", "HW1", "80");
    assert_eq!(first["outcome"]["status"], "recomputed");
    assert_eq!(first["outcome"]["letter"], "E");
    assert_percentage(&first["outcome"], 48.0);

    let second = score(dir.path(), "Exams", "Midterm", "70");
    assert_eq!(second["outcome"]["letter"], "C");
    assert_eq!(second["outcome"]["total_weight"], 100);
    assert_percentage(&second["outcome"], 76.0);
    assert_eq!(second["score"], 70);

    assert_eq!(stored_grade(dir.path()), "C");
}

#[test]
fn test_score_human_output() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "80");

    gradebook()
        .current_dir(dir.path())
        .args(class_args(
            &["score"],
            &[
                "--category", "Exams", "--assignment", "Midterm", "--student", STUDENT,
                "--score", "70",
            ],
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Scored Midterm for u0000001: 70"))
        .stdout(predicate::str::contains(
            "u0000001 in CS 3500 Spring 2024: C (76.00%)",
        ));
}

#[test]
fn test_score_records_output() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    gradebook()
        .current_dir(dir.path())
        .args(["--format", "records"])
        .args(class_args(
            &["score"],
            &[
                "--category", "Homework", "--assignment", "HW1", "--student", STUDENT,
                "--score", "100",
            ],
        ))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H gradebook=1 records=1 mode=score student=u0000001 score=100",
        ))
        .stdout(predicate::str::contains("status=recomputed letter=D-"))
        .stdout(predicate::str::contains(
            "C class=\"CS 3500 Spring 2024\" name=\"Homework\" weight=60 earned=100 possible=100",
        ));
}

#[test]
fn test_perfect_scores_earn_an_a() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    score(dir.path(), "Homework", "HW1", "100");
    let outcome = score(dir.path(), "Exams", "Midterm", "100");
    assert_eq!(outcome["outcome"]["letter"], "A");
    assert_percentage(&outcome["outcome"], 100.0);
}

#[test]
fn test_score_for_unenrolled_student_leaves_grade_unset() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    let json = run_json(
        dir.path(),
        &class_args(
            &["score"],
            &[
                "--category", "Homework", "--assignment", "HW1", "--student", "u7777777",
                "--score", "90",
            ],
        ),
    );
    assert_eq!(json["outcome"]["status"], "not_found");
    assert_eq!(json["outcome"]["missing"], "enrollment");

    let classes = run_json(dir.path(), &["classes", "--student", "u7777777"]);
    assert_eq!(classes.as_array().unwrap().len(), 0);

    // No score was recorded for the unenrolled student
    let shown = run_json(
        dir.path(),
        &class_args(&["grade", "show"], &["--student", "u7777777"]),
    );
    assert_eq!(shown["assignments"][0]["name"], "HW1");
    assert_eq!(shown["assignments"][0]["score"], serde_json::Value::Null);
}

#[test]
fn test_score_unknown_assignment_fails() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    gradebook()
        .current_dir(dir.path())
        .args(class_args(
            &["score"],
            &[
                "--category", "Homework", "--assignment", "HW7", "--student", STUDENT,
                "--score", "90",
            ],
        ))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("assignment not found: HW7"));
}

#[test]
fn test_score_unknown_class_json_error() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    let output = gradebook()
        .current_dir(dir.path())
        .args([
            "--format", "json", "score", "--subject", "CS", "--number", "3500", "--season",
            "Fall", "--year", "2024", "--category", "Homework", "--assignment", "HW1",
            "--student", STUDENT, "--score", "90",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "not_found");
}

// ============================================================================
// Recompute command tests
// ============================================================================

#[test]
fn test_recompute_all_after_adding_assignment() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "80");
    score(dir.path(), "Exams", "Midterm", "70");

    run(
        dir.path(),
        &class_args(
            &["assignment", "add"],
            &["--category", "Homework", "HW2", "--points", "100"],
        ),
    );

    // Adding an assignment does not touch stored grades
    assert_eq!(stored_grade(dir.path()), "C");

    let json = run_json(dir.path(), &class_args(&["recompute"], &["--all"]));
    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["student"], STUDENT);
    assert_eq!(json["results"][0]["outcome"]["letter"], "E");
    assert_percentage(&json["results"][0]["outcome"], 52.0);

    assert_eq!(stored_grade(dir.path()), "E");
}

#[test]
fn test_recompute_single_student() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "95");

    gradebook()
        .current_dir(dir.path())
        .args(class_args(&["recompute"], &["--student", STUDENT]))
        .assert()
        .success()
        .stdout(predicate::str::contains("u0000001 in CS 3500 Spring 2024: E (57.00%)"));
}

#[test]
fn test_recompute_unknown_class_is_not_an_error() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    let json = run_json(
        dir.path(),
        &[
            "recompute", "--subject", "CS", "--number", "3500", "--season", "Summer",
            "--year", "2024", "--student", STUDENT,
        ],
    );
    assert_eq!(json["outcome"]["status"], "not_found");
    assert_eq!(json["outcome"]["missing"], "class");
}

#[test]
fn test_recompute_without_weighted_work_keeps_grade_unset() {
    let dir = tempdir().unwrap();
    run(dir.path(), &["init"]);
    run(dir.path(), &["department", "add", "CS", "Computer Science"]);
    run(dir.path(), &["course", "add", "CS", "3500", "Software Practice"]);
    run(dir.path(), &class_args(&["class", "add"], &[]));
    run(dir.path(), &class_args(&["category", "add"], &["Homework", "--weight", "60"]));
    run(dir.path(), &class_args(&["enroll"], &["--student", STUDENT]));

    let json = run_json(dir.path(), &class_args(&["recompute"], &["--student", STUDENT]));
    assert_eq!(json["outcome"]["status"], "no_participating_categories");
    assert_eq!(stored_grade(dir.path()), "--");
}

#[test]
fn test_recompute_requires_student_or_all() {
    gradebook()
        .args(class_args(&["recompute"], &[]))
        .assert()
        .code(2);
}

// ============================================================================
// Grade show tests
// ============================================================================

#[test]
fn test_grade_show_lists_scores_and_preview() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());
    score(dir.path(), "Homework", "HW1", "80");

    gradebook()
        .current_dir(dir.path())
        .args(class_args(&["grade", "show"], &["--student", STUDENT]))
        .assert()
        .success()
        .stdout(predicate::str::contains("HW1"))
        .stdout(predicate::str::contains("Midterm"))
        .stdout(predicate::str::contains("Stored grade: E"));
}

#[test]
fn test_grade_show_json_does_not_store() {
    let dir = tempdir().unwrap();
    setup_class(dir.path());

    let json = run_json(
        dir.path(),
        &class_args(&["grade", "show"], &["--student", STUDENT]),
    );
    assert_eq!(json["outcome"]["letter"], "E");
    assert_eq!(json["stored_grade"], serde_json::Value::Null);
    assert_eq!(json["assignments"].as_array().unwrap().len(), 2);
    assert_eq!(json["assignments"][0]["score"], serde_json::Value::Null);

    assert_eq!(stored_grade(dir.path()), "--");
}

use crate::cli::support::gradebook;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "classes", "--student", "u0000001"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(dir.path())
        .args(["--log-level", "warn", "classes", "--student", "u0000001"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(dir.path())
        .args(["--verbose", "classes", "--student", "u0000001"])
        .assert()
        .success()
        .stderr(predicate::str::contains("discover_store"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let output = gradebook()
        .current_dir(dir.path())
        .args([
            "--log-level", "debug", "--format", "json", "gpa", "--student", "u0000001",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    // stdout must still parse as a single JSON document
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["student"], "u0000001");
}

#[test]
fn test_log_json_emits_structured_lines() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let output = gradebook()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "gpa", "--student", "u0000001"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_env_filter_variable() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(dir.path())
        .env("GRADEBOOK_LOG", "gradebook=debug")
        .args(["classes", "--student", "u0000001"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

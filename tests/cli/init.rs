use crate::cli::support::gradebook;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized gradebook store"));

    assert!(dir.path().join(".gradebook").is_dir());
    assert!(dir.path().join(".gradebook/gradebook.db").exists());
    assert!(dir.path().join(".gradebook/config.toml").exists());
}

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join(".gradebook/config.toml")).unwrap();
    let config: toml::Table = toml::from_str(&raw).unwrap();
    assert_eq!(config["version"].as_integer(), Some(1));
    assert_eq!(config["display"]["no_grade_marker"].as_str(), Some("--"));
    assert_eq!(config["display"]["gpa_decimals"].as_integer(), Some(2));
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init keeps the existing store
    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

#[test]
fn test_init_explicit_store_path() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grades");

    gradebook()
        .arg("--store")
        .arg(&store)
        .arg("init")
        .assert()
        .success();

    assert!(store.join("gradebook.db").exists());
    assert!(!dir.path().join(".gradebook").exists());
}

#[test]
fn test_init_json_format() {
    let dir = tempdir().unwrap();

    let output = gradebook()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["store"].as_str().unwrap().ends_with(".gradebook"));
}

#[test]
fn test_init_records_format() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H gradebook=1 records=1 mode=init"));
}

// ============================================================================
// Store discovery tests
// ============================================================================

#[test]
fn test_command_without_store_fails() {
    let dir = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .args(["gpa", "--student", "u0000001"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("term/spring");
    std::fs::create_dir_all(&nested).unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(&nested)
        .args(["department", "add", "CS", "Computer Science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created department CS"));
}

#[test]
fn test_root_flag_selects_project() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();

    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    gradebook()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(dir.path())
        .args(["classes", "--student", "u0000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not enrolled in any classes"));
}

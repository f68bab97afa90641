//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_shows_paths_and_defaults() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory"))
        .stdout(predicate::str::contains("Expense Tracker"))
        .stdout(predicate::str::contains("250ms"));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"tick_rate_ms\": 250"));
}

#[test]
fn test_config_reads_existing_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "title": "Road Trip" }"#).unwrap();

    tracker_cmd(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Trip"));
}

#[test]
fn test_invalid_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    tracker_cmd(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

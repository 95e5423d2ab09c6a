//! Tests for the `stepform` binary.
//!
//! Every command runs with `STEPFORM_DATA_DIR` pointed at a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stepform(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stepform").unwrap();
    cmd.env("STEPFORM_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn pages_lists_routes() {
    let dir = TempDir::new().unwrap();
    stepform(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("/wizard/native-form-submit"))
        .stdout(predicate::str::contains("/wizard/simple"));
}

#[test]
fn run_reports_blank_field() {
    let dir = TempDir::new().unwrap();
    stepform(&dir)
        .args(["run", "--keys", "click:input,Enter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "first-name-form-field: This field cannot be left blank.",
        ));
}

#[test]
fn run_then_log_as_csv() {
    let dir = TempDir::new().unwrap();
    stepform(&dir)
        .args(["run", "--type", "MyFirstName", "--keys", "Enter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Navigate action was called. Starting index: 0. Ending index: 1",
        ));

    stepform(&dir)
        .args(["log", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "timestamp,session_id,page,action,reason,starting_index,requested_index,outcome,result_text",
        ))
        .stdout(predicate::str::contains("navigate,next,0,1,applied"));
}

#[test]
fn run_rejects_unknown_page() {
    let dir = TempDir::new().unwrap();
    stepform(&dir)
        .args(["run", "--page", "/wizard/unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/wizard/unknown"));
}

#[test]
fn init_writes_config_files() {
    let dir = TempDir::new().unwrap();
    stepform(&dir).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("strings.yaml").exists());

    stepform(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("/wizard/native-form-submit"));
}

#[test]
fn empty_log() {
    let dir = TempDir::new().unwrap();
    stepform(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No actions recorded."));
}

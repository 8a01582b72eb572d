//! End-to-end runs of the check-tests binary against LCOV fixtures

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn check_tests(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("check-tests").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CHECK_TESTS_CONFIG")
        .env_remove("CHECK_TESTS_REPORT_PATH")
        .env_remove("CHECK_TESTS_REPORT_INCLUDE")
        .env_remove("CHECK_TESTS_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace(lcov: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lcov.info"), lcov).unwrap();
    dir
}

#[test]
fn test_all_test_code_executed() {
    let dir = workspace("SF:tests/api.rs\nDA:1,1\nDA:2,3\nend_of_record\nSF:src/lib.rs\nDA:1,0\nend_of_record\n");

    check_tests(&dir).assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_unexecuted_test_lines_are_reported() {
    let dir = TempDir::new().unwrap();
    let absolute = dir.path().join("tests").join("api.rs");
    fs::write(
        dir.path().join("lcov.info"),
        format!("SF:{}\nDA:1,1\nDA:4,0\nDA:6,0\nDA:7,2\nDA:10,0\nend_of_record\n", absolute.display()),
    )
    .unwrap();

    check_tests(&dir)
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Some or all code lines in the following test modules are not being executed:",
        ))
        .stderr(predicate::str::contains("tests/api.rs\t4-6, 10"));
}

#[test]
fn test_report_without_test_files() {
    let dir = workspace("SF:src/lib.rs\nDA:1,1\nend_of_record\n");

    check_tests(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Tests must have been run with coverage"));
}

#[test]
fn test_include_flag_replaces_configured_patterns() {
    let dir = workspace("SF:src/lib.rs\nDA:1,1\nend_of_record\nSF:tests/api.rs\nDA:1,0\nend_of_record\n");

    check_tests(&dir).args(["--include", "src/**"]).assert().success();
}

#[test]
fn test_report_path_from_environment() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/cov.lcov"), "SF:tests/a.rs\nDA:1,0\nend_of_record\n").unwrap();

    check_tests(&dir)
        .env("CHECK_TESTS_REPORT_PATH", "target/cov.lcov")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tests/a.rs\t1"));
}

#[test]
fn test_config_file() {
    let dir = workspace("SF:it/flow.rs\nDA:1,0\nend_of_record\n");
    fs::write(dir.path().join("check.toml"), "[report]\ninclude = [\"it/**\"]\n").unwrap();

    check_tests(&dir)
        .args(["--config", "check.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("it/flow.rs\t1"));
}

#[test]
fn test_missing_report_is_an_error() {
    let dir = TempDir::new().unwrap();

    check_tests(&dir)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read coverage report"));
}

#[test]
fn test_malformed_report_is_an_error() {
    let dir = workspace("SF:tests/a.rs\nDA:1,1\n");

    check_tests(&dir)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unterminated record"));
}

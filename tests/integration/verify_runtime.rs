//! Tests for `strata verify-runtime`
//!
//! The version query is redirected to `echo` so the tests do not depend on
//! an actual interpreter being installed.

use super::common::strata_command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
fn write_echo_project(temp: &TempDir, reported: &str, runtime: &str) {
    fs::write(temp.path().join("requirements.txt"), "requests==2.31.0\n").unwrap();
    fs::write(
        temp.path().join("strata.yaml"),
        format!(
            "runtime: {}\nversion_query:\n  program: echo\n  args: [\"{}\"]\n",
            runtime, reported
        ),
    )
    .unwrap();
}

#[cfg(unix)]
#[test]
fn test_compatible_runtime() {
    let temp = TempDir::new().unwrap();
    write_echo_project(&temp, "Python 3.11.4", "python3.11");

    strata_command(temp.path())
        .arg("verify-runtime")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.11.4"));
}

#[cfg(unix)]
#[test]
fn test_incompatible_runtime() {
    let temp = TempDir::new().unwrap();
    write_echo_project(&temp, "Python 3.11.4", "python3.9");

    strata_command(temp.path())
        .arg("verify-runtime")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not satisfy"));
}

#[cfg(unix)]
#[test]
fn test_explicit_specifier_overrides_config() {
    let temp = TempDir::new().unwrap();
    write_echo_project(&temp, "Python 3.11.4", "python3.9");

    strata_command(temp.path())
        .args(["verify-runtime", "python3.11"])
        .assert()
        .success();
}

#[test]
fn test_specifier_without_version_token() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "requests==2.31.0\n").unwrap();

    strata_command(temp.path())
        .args(["verify-runtime", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no version token"));
}

#[test]
fn test_missing_runtime_executable() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "requests==2.31.0\n").unwrap();
    fs::write(
        temp.path().join("strata.yaml"),
        "version_query:\n  program: definitely-not-a-real-binary\n",
    )
    .unwrap();

    strata_command(temp.path())
        .args(["verify-runtime", "python3.11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runtime unavailable"));
}

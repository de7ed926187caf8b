//! Tests for `strata checksum`

use super::common::strata_command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_checksum_is_hex_and_deterministic() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "requests==2.31.0\n").unwrap();

    let first = strata_command(temp.path())
        .arg("checksum")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{64}\n$").unwrap());
    let digest = String::from_utf8_lossy(&first.get_output().stdout).to_string();

    strata_command(temp.path())
        .arg("checksum")
        .assert()
        .success()
        .stdout(predicate::str::diff(digest));
}

#[test]
fn test_checksum_changes_with_content() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("requirements.txt");

    fs::write(&manifest, "requests==2.31.0\n").unwrap();
    let before = strata_command(temp.path())
        .arg("checksum")
        .assert()
        .success();
    let before = String::from_utf8_lossy(&before.get_output().stdout).to_string();

    // One-byte change: drop the trailing newline
    fs::write(&manifest, "requests==2.31.0").unwrap();
    strata_command(temp.path())
        .arg("checksum")
        .assert()
        .success()
        .stdout(predicate::str::diff(before).not());
}

#[test]
fn test_checksum_without_manifest_names_path() {
    let temp = TempDir::new().unwrap();

    strata_command(temp.path())
        .arg("checksum")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("cannot find manifest")
                .and(predicate::str::contains("requirements.txt")),
        );
}

#[test]
fn test_checksum_respects_configured_algorithm() {
    let temp = TempDir::new().unwrap();
    // sha256 of the empty string, pinned
    fs::write(temp.path().join("requirements.txt"), "").unwrap();
    fs::write(
        temp.path().join("strata.yaml"),
        "checksum_algorithm: sha256\n",
    )
    .unwrap();

    strata_command(temp.path())
        .arg("checksum")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n",
        ));
}

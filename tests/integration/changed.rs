//! Tests for `strata changed`

use super::common::strata_command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_project(temp: &TempDir, remote_url: &str, local_content: &str) {
    fs::write(temp.path().join("requirements.txt"), local_content).unwrap();
    fs::write(
        temp.path().join("strata.yaml"),
        format!("remote_manifest_url: {}\n", remote_url),
    )
    .unwrap();
}

#[tokio::test]
async fn test_unchanged_when_remote_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("requests==2.31.0\n"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    write_project(&temp, &server.uri(), "requests==2.31.0\n");

    strata_command(temp.path())
        .arg("changed")
        .assert()
        .success()
        .stdout(predicate::str::diff("unchanged\n"));
}

#[tokio::test]
async fn test_changed_when_remote_differs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("requests==2.30.0\n"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    write_project(&temp, &server.uri(), "requests==2.31.0\n");

    strata_command(temp.path())
        .arg("changed")
        .assert()
        .success()
        .stdout(predicate::str::diff("changed\n"));
}

#[tokio::test]
async fn test_changed_when_nothing_published() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    write_project(&temp, &server.uri(), "requests==2.31.0\n");

    strata_command(temp.path())
        .arg("changed")
        .assert()
        .success()
        .stdout(predicate::str::diff("changed\n"));
}

#[tokio::test]
async fn test_remote_failure_is_an_error_not_a_verdict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    write_project(&temp, &server.uri(), "requests==2.31.0\n");

    strata_command(temp.path())
        .arg("changed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch remote manifest"));
}

#[test]
fn test_changed_without_remote_url_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "requests==2.31.0\n").unwrap();

    strata_command(temp.path())
        .arg("changed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote_manifest_url"));
}

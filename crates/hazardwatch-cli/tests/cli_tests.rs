//! CLI behavior tests; none of these touch the network.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("hazardwatch-cli").expect("binary should build")
}

#[test]
fn help_lists_the_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("messages"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn chat_answers_an_earthquake_query() {
    cli()
        .args(["chat", "what should I do in an earthquake?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drop, cover, and hold on"));
}

#[test]
fn chat_falls_back_for_unmatched_queries() {
    cli()
        .args(["chat", "tell me a joke"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What would you like to know?"));
}

#[test]
fn messages_lists_and_filters_a_content_directory() {
    let dir = tempfile::tempdir().expect("create temp content dir");
    fs::write(
        dir.path().join("emergency_messages.json"),
        r#"[
            {"disaster": "Earthquake", "message": "Drop, cover, and hold on."},
            {"disaster": "Flood", "message": "Move to higher ground."}
        ]"#,
    )
    .expect("write messages fixture");

    cli()
        .args(["messages", "--content-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Earthquake]"))
        .stdout(predicate::str::contains("[Flood]"));

    cli()
        .args(["messages", "--disaster", "flood", "--content-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Flood]"))
        .stdout(predicate::str::contains("[Earthquake]").not());
}

#[test]
fn messages_fails_cleanly_without_a_content_file() {
    let dir = tempfile::tempdir().expect("create temp content dir");

    cli()
        .args(["messages", "--content-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load messages"));
}

#[test]
fn events_requires_lon_when_lat_is_given() {
    cli()
        .args(["events", "--lat", "10.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lon"));
}

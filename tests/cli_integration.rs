#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cardz_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("cardz"));
    cmd.env("CARDZ_DATA", temp.path().join("cards.json"))
        .env("NO_COLOR", "1")
        .env_remove("CARDZ_LOG");
    cmd
}

fn search_json(temp: &TempDir, query: &str) -> Value {
    let output = cardz_cmd(temp)
        .args(["search", "--json", query])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_create_search_delete_workflow() {
    let temp = TempDir::new().unwrap();

    cardz_cmd(&temp)
        .args(["create", "-s", "Annual Report 2024", "Budget", "Report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card created (1): Budget Report"));

    cardz_cmd(&temp)
        .args(["create", "--parent", "1", "Quarterly", "Numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card created (2)"));

    let payload = search_json(&temp, "quarterly");
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["results"][0]["path"], "Budget Report/Quarterly Numbers");

    cardz_cmd(&temp)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted (1)"));

    let payload = search_json(&temp, "quarterly");
    assert_eq!(payload["count"], 0);
}

#[test]
fn test_search_payload_shape() {
    let temp = TempDir::new().unwrap();
    cardz_cmd(&temp)
        .args(["create", "--link", "https://example.com", "Team", "Agenda"])
        .assert()
        .success();

    let payload = search_json(&temp, "  Agenda ");
    assert_eq!(payload["query"], "Agenda");
    let hit = &payload["results"][0];
    assert_eq!(hit["id"], 1);
    assert_eq!(hit["name"], "Team Agenda");
    assert_eq!(hit["type"], "card");
    assert_eq!(hit["link"], "https://example.com");
}

#[test]
fn test_short_query_returns_empty_payload() {
    let temp = TempDir::new().unwrap();
    let payload = search_json(&temp, "a");
    assert_eq!(payload["count"], 0);
    assert_eq!(payload["results"], Value::Array(vec![]));
}

#[test]
fn test_update_reply_json() {
    let temp = TempDir::new().unwrap();
    cardz_cmd(&temp).args(["create", "Draft"]).assert().success();

    let output = cardz_cmd(&temp)
        .args(["update", "1", "--name", "Final", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let reply: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reply, serde_json::json!({ "success": true }));

    let payload = search_json(&temp, "final");
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["results"][0]["name"], "Final");
    assert_eq!(search_json(&temp, "draft")["count"], 0);

    cardz_cmd(&temp)
        .args(["update", "9", "--name", "Ghost", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"error\": \"not found\""));
}

#[test]
fn test_create_reply_json() {
    let temp = TempDir::new().unwrap();
    let output = cardz_cmd(&temp)
        .args(["create", "--json", "-s", "weekly", "Team", "Sync"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reply: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reply["success"], true);
    assert_eq!(reply["card"]["id"], 1);
    assert_eq!(reply["card"]["name"], "Team Sync");
    assert_eq!(reply["card"]["subtitle"], "weekly");
    assert!(reply.get("error").is_none());
}

#[test]
fn test_unknown_parent_fails() {
    let temp = TempDir::new().unwrap();
    cardz_cmd(&temp)
        .args(["create", "--parent", "42", "Orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!temp.path().join("cards.json").exists());
}

#[test]
fn test_list_renders_tree() {
    let temp = TempDir::new().unwrap();
    cardz_cmd(&temp).args(["create", "Reports"]).assert().success();
    cardz_cmd(&temp)
        .args(["create", "-p", "1", "January"])
        .assert()
        .success();

    cardz_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports"))
        .stdout(predicate::str::contains("└── 2. January"));
}

#[test]
fn test_corrupt_store_reads_empty_and_refuses_writes() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("cards.json");
    fs::write(&data, "{ not json").unwrap();

    let payload = search_json(&temp, "anything");
    assert_eq!(payload["count"], 0);

    cardz_cmd(&temp)
        .args(["create", "New"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&data).unwrap(), "{ not json");
}

#[test]
fn test_data_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other.json");

    cardz_cmd(&temp)
        .arg("--data")
        .arg(&other)
        .args(["create", "Elsewhere"])
        .assert()
        .success();
    assert!(other.exists());
    assert!(!temp.path().join("cards.json").exists());
}

#[test]
fn test_config_roundtrip() {
    let temp = TempDir::new().unwrap();
    cardz_cmd(&temp)
        .args(["config", "max-results", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-results set to 5"));

    cardz_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max-results = 5"));
}

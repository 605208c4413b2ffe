//! End-to-end tests for the sift4 binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn sift4() -> Command {
    let mut cmd = Command::cargo_bin("sift4").unwrap();
    cmd.env_remove("SIFT4_CONFIG");
    cmd
}

#[test]
fn test_distance_human() {
    sift4()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance:   3"));
}

#[test]
fn test_distance_json() {
    let output = sift4()
        .args(["-f", "json", "distance", "ab", "ba", "--max-offset", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["distance"], 1.0);
    assert_eq!(value["algorithm"], "sift4");
}

#[test]
fn test_distance_simple() {
    let output = sift4()
        .args(["-f", "json", "distance", "--simple", "-o", "5", "hello", "helo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["distance"], 1.0);
    assert_eq!(value["algorithm"], "simple");
}

#[test]
fn test_distance_with_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"max_offset": 5, "case_sensitive": false}}"#).unwrap();

    sift4()
        .arg("--config")
        .arg(config.path())
        .args(["distance", "HELLO", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance:   0"));
}

#[test]
fn test_rank_from_stdin() {
    let output = sift4()
        .args(["-f", "json", "rank", "spelling", "--limit", "2", "-o", "5"])
        .write_stdin("peeling\nspeling\n\nshelling\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_candidates"], 3);
    let matches = value["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["candidate"], "speling");
    assert_eq!(matches[1]["candidate"], "shelling");
}

#[test]
fn test_rank_from_file_within() {
    let mut candidates = NamedTempFile::new().unwrap();
    writeln!(candidates, "mitten\nsitting\nkitchen\nbanana").unwrap();

    sift4()
        .arg("rank")
        .arg("kitten")
        .arg("--candidates")
        .arg(candidates.path())
        .args(["--within", "2", "-o", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mitten"))
        .stdout(predicate::str::contains("kitchen"))
        .stdout(predicate::str::contains("sitting").not());
}

#[test]
fn test_invalid_tokenizer_fails() {
    sift4()
        .args(["distance", "a", "b", "--tokenizer", "syllables"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tokenizer"));
}

#[test]
fn test_missing_config_file_fails() {
    sift4()
        .args(["--config", "/nonexistent/sift4.json", "distance", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_simple_rejects_token_options() {
    sift4()
        .args(["distance", "--simple", "--ignore-case", "Hello", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

//! CLI end-to-end tests
//!
//! Tests for the comicname command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the comicname binary
#[allow(deprecated)]
fn comicname_cmd() -> Command {
    let mut cmd = Command::cargo_bin("comicname").unwrap();
    // Keep the user's config files out of the tests.
    cmd.current_dir(std::env::temp_dir());
    cmd.env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = comicname_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = comicname_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comicname"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = comicname_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("comicname "));
}

#[test]
fn test_cli_parse_help() {
    let mut cmd = comicname_cmd();
    cmd.args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse one or more file names"));
}

#[test]
fn test_cli_parse_prints_fields() {
    let mut cmd = comicname_cmd();
    cmd.args(["parse", "Wonder Woman v2 #49 (1991) (DC) (Digital).cbr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wonder Woman"))
        .stdout(predicate::str::contains("issue:"))
        .stdout(predicate::str::contains("1991"));
}

#[test]
fn test_cli_parse_json() {
    let mut cmd = comicname_cmd();
    let output = cmd
        .args(["parse", "--json", "X-Men-V1-067.cbr", "Batman Annual #1 (of 2) (1987).cbz"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["series"], "X-Men");
    assert_eq!(json[0]["issue"], "67");
    assert_eq!(json[1]["annual"], true);
    assert_eq!(json[1]["issue_count"], "2");
}

#[test]
fn test_cli_parse_error_fails() {
    let mut cmd = comicname_cmd();
    cmd.args(["parse", "Batman) #1.cbz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse failed"));
}

#[test]
fn test_cli_tokens() {
    let mut cmd = comicname_cmd();
    cmd.args(["tokens", "Batman #3.cbz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-number"))
        .stdout(predicate::str::contains("archive-type"));
}

#[test]
fn test_cli_scan_directory() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Goblin (2021).cbz"), b"").unwrap();
    fs::write(temp.path().join("readme.txt"), b"").unwrap();

    let mut cmd = comicname_cmd();
    cmd.args(["scan", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblin"))
        .stdout(predicate::str::contains("1 files"));
}

#[test]
fn test_cli_scan_json_with_config() {
    let temp = tempdir().unwrap();
    let comics = temp.path().join("comics");
    fs::create_dir(&comics).unwrap();
    fs::write(comics.join("Some Comic 01 (1999) -- c2c.cbr"), b"").unwrap();

    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[parser]
remove_c2c = true

[scan]
extensions = ["cbr"]
"#,
    )
    .unwrap();

    let mut cmd = comicname_cmd();
    let output = cmd
        .args([
            "scan",
            "--json",
            "--config",
            config_file.to_str().unwrap(),
            comics.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["info"]["series"], "Some Comic");
    assert_eq!(json[0]["info"]["c2c"], true);
    assert_eq!(json[0]["info"]["remainder"], "");
}

#[test]
fn test_cli_scan_missing_directory() {
    let temp = tempdir().unwrap();
    let mut cmd = comicname_cmd();
    cmd.args(["scan", temp.path().join("missing").to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[parser]
remove_publisher = true
"#,
    )
    .unwrap();

    let mut cmd = comicname_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_cli_validate_rejects_bad_extension() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(
        &config_file,
        r#"
[scan]
extensions = [".cbz"]
"#,
    )
    .unwrap();

    let mut cmd = comicname_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure();
}

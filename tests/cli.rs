// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;

fn prtitle(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("prtitle").unwrap();
    cmd.current_dir(dir)
        .env_remove("PR_TITLE")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"));
    cmd
}

#[test]
fn test_check_valid_title() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .args(["check", "feat: Add feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feat: Add feature"));
}

#[test]
fn test_check_invalid_title_fails() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .args(["check", "fix:"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "No subject found in pull request title \"fix:\".",
        ))
        .stderr(predicate::str::contains("Invalid pull request title"));
}

#[test]
fn test_check_reads_title_from_env() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .arg("check")
        .env("PR_TITLE", "Fix bug")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown release type \"null\""));
}

#[test]
fn test_check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = prtitle(dir.path())
        .args([
            "--format",
            "json",
            "check",
            "fox: foobar",
            "--types",
            "fix",
            "--action",
            "warning",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["kind"], "TYPE_ERROR");
    assert_eq!(json["errors"][0]["context"]["errorWord"], "fox");
    assert!(json["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("Did you mean \"fix\"?"));
}

#[test]
fn test_check_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("prtitle.toml"),
        "scopes = [\"foo\", \"core\"]\n",
    )
    .unwrap();

    prtitle(dir.path())
        .args(["check", "fix(core,e2e,foo,bar): Bar"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Use one of the available scopes: foo, core.",
        ));
}

#[test]
fn test_check_ignore_action() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .args(["check", "nope", "--action", "ignore"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_action_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prtitle.toml"), "action = \"warning\"\n").unwrap();

    prtitle(dir.path()).args(["check", "nope"]).assert().success();

    prtitle(dir.path())
        .args(["check", "nope", "--action", "error"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid pull request title"));
}

#[test]
fn test_check_explicit_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .args(["--config", "missing.toml", "check", "feat: Add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_types_lists_defaults() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("feat").and(predicate::str::contains("A bug fix")));
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();
    prtitle(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("prtitle.toml").exists());

    prtitle(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    prtitle(dir.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("prtitle.toml")).unwrap();

    prtitle(dir.path())
        .args(["init", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

//! CLI Interface E2E Tests
//!
//! These tests run the minit binary against the fixture sources and check
//! its listings, diagnostics and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A minit command isolated from any ambient configuration
fn minit(work_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_minit"));
    cmd.current_dir(work_dir.path())
        .env_remove("MINIT_VERBOSE")
        .env_remove("MINIT_CONFIG")
        .env_remove("MINIT_NO_COLOR")
        .env("XDG_CONFIG_HOME", work_dir.path())
        .arg("--no-color");
    cmd
}

fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[test]
fn test_cli_help() {
    let dir = work_dir();
    minit(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let dir = work_dir();
    minit(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tokens_text_listing() {
    let dir = work_dir();
    minit(&dir)
        .arg("tokens")
        .arg(fixtures_dir().join("program.mini"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Keyword(\"var\")\nIdentifier(\"b3\")\nAssign(\"=\")\nNumber(\"2\")\nSemicolon(\";\")\n",
        ))
        .stdout(predicate::str::contains("Keyword(\"if\")\nLParen(\"(\")"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_tokens_with_spans() {
    let dir = work_dir();
    minit(&dir)
        .args(["tokens", "--spans"])
        .arg(fixtures_dir().join("program.mini"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier(\"a\") @ 2:1"))
        .stdout(predicate::str::contains("Keyword(\"return\") @ 4:1"));
}

#[test]
fn test_tokens_from_stdin() {
    let dir = work_dir();
    minit(&dir)
        .args(["tokens", "-"])
        .write_stdin("123abc")
        .assert()
        .success()
        .stdout("Number(\"123\")\nIdentifier(\"abc\")\n");
}

#[test]
fn test_tokens_json() {
    let dir = work_dir();
    let output = minit(&dir)
        .args(["tokens", "--format", "json", "-"])
        .write_stdin("if(x)")
        .output()
        .expect("Failed to run minit");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["keyword", "lparen", "identifier", "rparen"]);
}

#[test]
fn test_tokens_reports_every_error() {
    let dir = work_dir();
    minit(&dir)
        .arg("tokens")
        .arg(fixtures_dir().join("bad.mini"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Identifier(\"y\")"))
        .stderr(predicate::str::contains("error[E1001]: unrecognized character '#'"))
        .stderr(predicate::str::contains("bad.mini:2:7"))
        .stderr(predicate::str::contains("error[E1001]: unrecognized character '@'"))
        .stderr(predicate::str::contains("bad.mini:3:5"))
        .stderr(predicate::str::contains("aborting due to 2 lexical error(s)"));
}

#[test]
fn test_tokens_fail_fast() {
    let dir = work_dir();
    minit(&dir)
        .args(["tokens", "--fail-fast"])
        .arg(fixtures_dir().join("bad.mini"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'#'"))
        .stderr(predicate::str::contains("'@'").not())
        .stderr(predicate::str::contains("aborting due to 1 lexical error(s)"));
}

#[test]
fn test_tokens_missing_file() {
    let dir = work_dir();
    minit(&dir)
        .args(["tokens", "does-not-exist.mini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File operation failed"))
        .stderr(predicate::str::contains("does-not-exist.mini"));
}

#[test]
fn test_check_summaries() {
    let dir = work_dir();
    minit(&dir)
        .arg("check")
        .arg(fixtures_dir().join("program.mini"))
        .arg(fixtures_dir().join("bad.mini"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("program.mini: ok (22 tokens)"))
        .stdout(predicate::str::contains("bad.mini: 2 error(s)"));
}

#[test]
fn test_check_clean_file() {
    let dir = work_dir();
    minit(&dir)
        .arg("check")
        .arg(fixtures_dir().join("program.mini"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_from_flag() {
    let dir = work_dir();
    minit(&dir)
        .arg("--config")
        .arg(fixtures_dir().join("minit.toml"))
        .args(["tokens", "-"])
        .write_stdin("a ;")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[").and(predicate::str::contains("\"semicolon\"")));
}

#[test]
fn test_config_from_current_dir() {
    let dir = work_dir();
    std::fs::write(dir.path().join("minit.toml"), "[output]\nspans = true\n").unwrap();
    minit(&dir)
        .args(["tokens", "-"])
        .write_stdin("a")
        .assert()
        .success()
        .stdout("Identifier(\"a\") @ 1:1\n");
}

#[test]
fn test_flag_overrides_config_format() {
    let dir = work_dir();
    minit(&dir)
        .arg("--config")
        .arg(fixtures_dir().join("minit.toml"))
        .args(["tokens", "--format", "text", "-"])
        .write_stdin("a")
        .assert()
        .success()
        .stdout("Identifier(\"a\")\n");
}

#[test]
fn test_missing_config_file() {
    let dir = work_dir();
    minit(&dir)
        .args(["--config", "nope.toml", "tokens", "-"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_file() {
    let dir = work_dir();
    std::fs::write(dir.path().join("minit.toml"), "[lexer]\nfail_fast = \"maybe\"\n").unwrap();
    minit(&dir)
        .args(["tokens", "-"])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

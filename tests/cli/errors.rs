//! Tests for usage errors, help and exit codes.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_exits_zero() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("secretenv"));
}

#[test]
fn test_unknown_command_exits_one() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_exit_one(&output);
}

#[test]
fn test_invalid_output_format_exits_one() {
    let t = Test::new();

    let output = t.secret(&["list", "--output", "yaml"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "yaml");
}

#[test]
fn test_missing_required_option_exits_one() {
    let t = Test::new();

    let output = t.secret(&["get"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "--name");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secretenv"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "aws", "secret", "list", "--output", "json"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert!(stdout(&output).is_empty(), "stdout must stay clean on failure");
}

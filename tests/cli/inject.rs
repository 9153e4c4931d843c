//! Tests for `secretenv aws -s`.

use crate::support::*;

#[test]
fn test_requires_secret_name() {
    let t = Test::new();

    let output = t.cmd().args(["aws", "--", "echo", "hi"]).output().unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "--secret-name");
}

#[test]
fn test_invalid_name_rejected() {
    let t = Test::new();

    let output = t.inject("bad name with spaces", &["echo", "hi"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid secret name");
}

#[test]
fn test_no_program_and_no_output() {
    let t = Test::new();

    let output = t.cmd().args(["aws", "-s", "app/env"]).output().unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "no command specified");
}

#[test]
fn test_output_file_exists_is_not_overwritten() {
    let t = Test::new();
    let path = t.write("secrets.env", "KEEP=me\n");

    let output = t
        .cmd()
        .args(["aws", "-s", "app/env", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "KEEP=me\n");
}

#[test]
fn test_output_conflicts_with_program() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["aws", "-s", "app/env", "-o", "out.env", "--", "echo", "hi"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert!(!t.path("out.env").exists());
}

#[cfg(unix)]
#[test]
fn test_unreachable_vault_still_runs_program() {
    let t = Test::new();

    let output = t.inject("app/env", &["sh", "-c", "echo ran-$INHERITED"]);
    assert_success(&output);
    assert_stdout_contains(&output, "ran-");
}

#[cfg(unix)]
#[test]
fn test_parent_environment_is_inherited() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("INHERITED_VAR", "from-parent")
        .args(["aws", "-s", "app/env", "--", "sh", "-c", "echo $INHERITED_VAR"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "from-parent");
}

#[cfg(unix)]
#[test]
fn test_child_exit_code_passthrough() {
    let t = Test::new();

    let output = t.inject("app/env", &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[cfg(unix)]
#[test]
fn test_unreachable_vault_writes_empty_file() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();

    let output = t
        .cmd()
        .args(["aws", "-s", "app/env", "-o", "out.env"])
        .output()
        .unwrap();
    assert_success(&output);

    let path = t.path("out.env");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o400);
}

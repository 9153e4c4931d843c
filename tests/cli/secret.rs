//! Tests for `secretenv aws secret ...` that fail before or at the vault.

use crate::support::*;

#[test]
fn test_create_multiple_sources() {
    let t = Test::new();
    let file = t.write("value.txt", "v\n");

    let output = t
        .cmd()
        .args(["aws", "secret", "create", "-n", "app/key", "-v", "inline", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(
        &output,
        "Use only one secret value source: --value, --value-stdin, or --file.",
    );
}

#[test]
fn test_create_requires_a_source() {
    let t = Test::new();

    let output = t.secret(&["create", "-n", "app/key"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "a secret value is required");
}

#[test]
fn test_create_empty_value_is_not_a_source() {
    let t = Test::new();

    let output = t.secret(&["create", "-n", "app/key", "-v", ""]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "a secret value is required");

    let file = t.write("value.txt", "{\"A\":\"1\"}\n");
    let output = t
        .cmd()
        .args(["aws", "secret", "create", "-n", "app/key", "-v", "", "--file"])
        .arg(&file)
        .output()
        .unwrap();
    assert_exit_one(&output);
    let err = stderr(&output);
    assert!(!err.contains("Use only one"), "stderr: {}", err);
    assert!(!err.contains("a secret value is required"), "stderr: {}", err);
}

#[test]
fn test_create_invalid_tag() {
    let t = Test::new();

    let output = t.secret(&["create", "-n", "app/key", "-v", "x", "-t", "novalue"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid tag 'novalue'");
}

#[test]
fn test_create_invalid_name() {
    let t = Test::new();

    let output = t.secret(&["create", "-n", "bad name with spaces", "-v", "x"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid secret name");
}

#[test]
fn test_create_vault_unreachable_is_fatal() {
    let t = Test::new();

    let output = t.secret(&["create", "-n", "app/key", "-v", "x", "--output", "json"]);
    assert_exit_one(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_update_nothing_to_update() {
    let t = Test::new();

    let output = t.secret(&["update", "-n", "app/key"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "nothing to update");
}

#[test]
fn test_upsert_malformed_file() {
    let t = Test::new();
    t.write(".env", MALFORMED_ENV);

    let output = t.secret(&["upsert", "--file", ".env", "--prefix", "app/dev"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "line 2");
}

#[test]
fn test_import_alias_accepted() {
    let t = Test::new();
    t.write(".env", MALFORMED_ENV);

    let output = t.secret(&["import", "--file", ".env", "--prefix", "app/dev"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "malformed line 2");
}

#[test]
fn test_list_invalid_tag() {
    let t = Test::new();

    let output = t.secret(&["list", "-t", "=prod"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid tag");
}

#[test]
fn test_delete_requires_yes() {
    let t = Test::new();

    for extra in [
        vec![],
        vec!["--recovery-days", "7"],
        vec!["--force-delete-without-recovery"],
        vec!["--recovery-days", "99", "--force-delete-without-recovery"],
    ] {
        let mut args = vec!["delete", "-n", "app/key"];
        args.extend(extra);
        let output = t.secret(&args);
        assert_exit_one(&output);
        assert_stderr_contains(&output, "requires confirmation");
    }
}

#[test]
fn test_delete_recovery_days_range() {
    let t = Test::new();

    let output = t.secret(&["delete", "-n", "app/key", "--recovery-days", "31", "--yes"]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "between 7 and 30");
}

#[test]
fn test_delete_recovery_and_force_conflict() {
    let t = Test::new();

    let output = t.secret(&[
        "delete",
        "-n",
        "app/key",
        "--recovery-days",
        "10",
        "--force-delete-without-recovery",
        "--yes",
    ]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "cannot be used together");
}

#[test]
fn test_group_level_flags_accepted() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["aws", "-r", "eu-west-1", "secret", "-p", "dev", "--output", "json", "get", "-n", "bad name"])
        .output()
        .unwrap();
    assert_exit_one(&output);
    assert_stderr_contains(&output, "invalid secret name");
}

//! CLI integration tests for mysql-pg-scriptgen.
//!
//! These tests verify command-line argument parsing, help output, and
//! exit codes for the error paths that do not need a live database.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a command for the mysql-pg-scriptgen binary.
fn cmd() -> Command {
    Command::cargo_bin("mysql-pg-scriptgen").unwrap()
}

/// A complete set of connection variables. The values never reach a
/// database in these tests; the runs fail earlier, on the manifest.
fn with_full_env(mut cmd: Command) -> Command {
    cmd.env_clear()
        .env("MYSQL_HOST", "127.0.0.1")
        .env("MYSQL_PORT", "3306")
        .env("MYSQL_USER", "root")
        .env("MYSQL_PASSWORD", "secret")
        .env("MYSQL_DATABASE", "legacy")
        .env("PG_HOST", "127.0.0.1")
        .env("PG_PORT", "5432")
        .env("PG_USER", "postgres")
        .env("PG_PASSWORD", "secret")
        .env("PG_DATABASE", "warehouse")
        .env("PG_SCHEMA", "public");
    cmd
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--output-json"))
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("--verbosity"));
}

#[test]
fn test_help_shows_defaults() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: migrationlist.csv]"))
        .stdout(predicate::str::contains("[default: ./src/migrations]"))
        .stdout(predicate::str::contains("[default: text]"))
        .stdout(predicate::str::contains("[default: info]"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mysql-pg-scriptgen"));
}

#[test]
fn test_short_manifest_flag() {
    // -m should work as short for --manifest
    cmd().args(["-m", "some.csv", "--help"]).assert().success();
}

// =============================================================================
// Exit Code Tests - Config Errors (Exit Code 1)
// =============================================================================

#[test]
fn test_missing_env_exits_with_code_1() {
    cmd()
        .env_clear()
        .assert()
        .code(1) // EXIT_CONFIG_ERROR
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("MYSQL_HOST"));
}

#[test]
fn test_invalid_port_exits_with_code_1() {
    with_full_env(cmd())
        .env("MYSQL_PORT", "not-a-port")
        .assert()
        .code(1) // EXIT_CONFIG_ERROR
        .stderr(predicate::str::contains("invalid port in MYSQL_PORT"));
}

// =============================================================================
// Exit Code Tests - Manifest Errors (Exit Code 2)
// =============================================================================

#[test]
fn test_missing_manifest_exits_with_code_2() {
    with_full_env(cmd())
        .args(["--manifest", "nonexistent_manifest.csv"])
        .assert()
        .code(2) // EXIT_MANIFEST_ERROR
        .stderr(predicate::str::contains("Manifest read error"));
}

#[test]
fn test_malformed_manifest_row_exits_with_code_2() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output_filename,source_table,target_table").unwrap();
    writeln!(file, "user.js,user").unwrap();

    with_full_env(cmd())
        .args(["--manifest", file.path().to_str().unwrap()])
        .assert()
        .code(2) // EXIT_MANIFEST_ERROR
        .stderr(predicate::str::contains("Manifest format error"))
        .stderr(predicate::str::contains("expected 3 fields, found 2"));
}

#[test]
fn test_empty_manifest_field_exits_with_code_2() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output_filename,source_table,target_table").unwrap();
    writeln!(file, ",user,user").unwrap();

    with_full_env(cmd())
        .args(["--manifest", file.path().to_str().unwrap()])
        .assert()
        .code(2) // EXIT_MANIFEST_ERROR
        .stderr(predicate::str::contains("empty output filename"));
}

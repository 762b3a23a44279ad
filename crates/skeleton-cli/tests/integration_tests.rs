//! End-to-end tests for the `skeleton` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `skeleton` command isolated from the caller's config, `.env` and log
/// settings.
fn skeleton(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("skeleton");
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("SKELETON_LOGGING__LEVEL")
        .env_remove("SKELETON_OUTPUT__NO_COLOR");
    cmd
}

#[test]
fn prints_greeting_then_sum() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .assert()
        .success()
        .code(0)
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_invocations_match() {
    let home = TempDir::new().unwrap();
    let first = skeleton(&home).output().unwrap();
    let second = skeleton(&home).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .arg("-vv")
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n")
        .stderr(predicate::str::contains("performing addition"));
}

#[test]
fn quiet_keeps_stdout() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .arg("-q")
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n");
}

#[test]
fn config_file_sets_log_level() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

    skeleton(&home)
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n")
        .stderr(predicate::str::contains("computed sum"));
}

#[test]
fn env_overrides_log_level() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .env("SKELETON_LOGGING__LEVEL", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("computed sum"));
}

#[test]
fn missing_config_file_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_argument_exits_with_usage_code() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_convention_is_accepted() {
    let home = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "anything"] {
        skeleton(&home)
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout("Hello, Skeleton!\n5 + 3 = 8\n")
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn empty_no_color_env_is_ignored() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .env("NO_COLOR", "")
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n");
}

#[test]
fn no_color_flag_keeps_stdout() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .arg("--no-color")
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n");
}

#[test]
fn no_color_config_env_keeps_stdout() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .env("SKELETON_OUTPUT__NO_COLOR", "true")
        .assert()
        .success()
        .stdout("Hello, Skeleton!\n5 + 3 = 8\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_log_level_in_file_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    skeleton(&home)
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid logging.level 'loud'"));
}

#[test]
fn unknown_log_level_in_env_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    skeleton(&home)
        .env("SKELETON_LOGGING__LEVEL", "loud")
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty());
}

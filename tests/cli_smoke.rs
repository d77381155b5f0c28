#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without crashing. Commands that touch
//! configuration get a scratch XDG_CONFIG_HOME so the user's real
//! config is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn lingo() -> Command {
    Command::cargo_bin("lingo").unwrap()
}

/// A command whose config lives in a scratch directory.
#[allow(deprecated)]
fn lingo_with_config_home(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lingo").unwrap();
    cmd.env("XDG_CONFIG_HOME", temp_dir.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    lingo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Multi-provider AI translation CLI",
        ))
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("i18n"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_displays_version() {
    lingo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    lingo()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("zh"))
        .stdout(predicate::str::contains("es"));
}

#[test]
fn test_providers_list_without_config() {
    let temp_dir = TempDir::new().unwrap();
    lingo_with_config_home(&temp_dir)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("qwen"))
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("gemini"))
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("lingo init"));
}

#[test]
fn test_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "claude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created"));

    let config_path = temp_dir.path().join("lingo").join("config.toml");
    let contents = std::fs::read_to_string(config_path).unwrap();
    assert!(contents.contains("default_provider = \"claude\""));
    assert!(contents.contains("[providers.qwen]"));
    assert!(contents.contains("your_gemini_api_key_here"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "qwen"])
        .assert()
        .success();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "openai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    lingo_with_config_home(&temp_dir)
        .args(["init", "--force", "--default-provider", "openai"])
        .assert()
        .success();

    let config_path = temp_dir.path().join("lingo").join("config.toml");
    let contents = std::fs::read_to_string(config_path).unwrap();
    assert!(contents.contains("default_provider = \"openai\""));
}

#[test]
fn test_init_rejects_unknown_provider() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "mystery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider"));
}

#[test]
fn test_validate_without_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lingo init"));
}

#[test]
fn test_validate_after_init_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "qwen"])
        .assert()
        .success();

    lingo_with_config_home(&temp_dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("qwen"));
}

#[test]
fn test_translate_invalid_language_code() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["translate", "hello", "--to", "invalid_lang_xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_translate_without_api_key_fails_with_hint() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "qwen"])
        .assert()
        .success();

    lingo_with_config_home(&temp_dir)
        .env_remove("DASHSCOPE_API_KEY")
        .args(["translate", "hello", "--to", "zh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"))
        .stderr(predicate::str::contains("DASHSCOPE_API_KEY"));
}

#[test]
fn test_i18n_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["init", "--default-provider", "qwen"])
        .assert()
        .success();

    // A fake key gets past provider resolution; the missing input file
    // fails before any request is made.
    lingo_with_config_home(&temp_dir)
        .env("DASHSCOPE_API_KEY", "test-key")
        .args(["i18n", "/nonexistent/messages.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_i18n_rejects_invalid_format() {
    let temp_dir = TempDir::new().unwrap();

    lingo_with_config_home(&temp_dir)
        .args(["i18n", "messages.json", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_i18n_help_shows_defaults() {
    lingo()
        .args(["i18n", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--languages"))
        .stdout(predicate::str::contains("zh,es"))
        .stdout(predicate::str::contains("--cache"))
        .stdout(predicate::str::contains("--format"));
}

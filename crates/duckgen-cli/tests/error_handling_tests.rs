//! Tests for error handling, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn duckgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("duckgen").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DUCKGEN_TEMPLATES_DIR");
    cmd
}

#[test]
fn test_invalid_duck_name_is_user_error() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["generate", "../evil"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid duck name '../evil'"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_invalid_action_name_is_user_error() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["generate", "todo", "add", "9lives"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid action name '9lives'"));
}

#[test]
fn test_missing_anchor_is_not_found() {
    let temp = TempDir::new().unwrap();
    let modules = temp.path().join("src/redux/modules");
    fs::create_dir_all(&modules).unwrap();
    fs::write(
        modules.join("todo.js"),
        "export default function reducer(state = {}) {\n  return state;\n}\n",
    )
    .unwrap();

    duckgen(temp.path())
        .args(["generate", "todo", "add"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Anchor '// Actions' not found"))
        .stderr(predicate::str::contains("Restore the anchor line"));

    let todo = fs::read_to_string(modules.join("todo.js")).unwrap();
    assert!(!todo.contains("ADD"));
}

#[test]
fn test_unknown_kit_is_rejected_by_clap() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["init", "--kit", "saga"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'saga'"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["--config", "missing.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_config_value_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("duckgen.toml"), "[defaults]\nkit = \"saga\"\n").unwrap();

    duckgen(temp.path())
        .arg("init")
        .assert()
        .code(4);

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_template_directory_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .env("DUCKGEN_TEMPLATES_DIR", temp.path().join("no-such-dir"))
        .args(["generate", "todo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Template resolution failed"));
}

#[test]
fn test_verbose_hint_is_shown() {
    let temp = TempDir::new().unwrap();

    duckgen(temp.path())
        .args(["generate", "bad/name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}

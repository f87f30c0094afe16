//! Integration tests for CLI behavior that does not need a running window manager.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run i3-quickterm with a private config home and no reachable window manager.
fn run_quickterm(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_i3-quickterm"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("I3SOCK", config_home.join("missing-i3.sock"))
        .env_remove("SWAYSOCK")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute i3-quickterm")
}

fn write_config(config_home: &Path, content: &str) {
    let dir = config_home.join("i3");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(dir.join("i3-quickterm.toml"), content).expect("Failed to write config");
}

#[test]
fn test_unknown_shell_names_available_shells() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_quickterm(temp_dir.path(), &["ruby"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Unknown shell 'ruby' (available shells: haskell, js, python, shell)"),
        "Expected shell list in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_unknown_shell_uses_configured_shells() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        r#"
[shells]
lua = "lua5.4"
ocaml = "utop"
"#,
    );

    let output = run_quickterm(temp_dir.path(), &["python"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("available shells: lua, ocaml"),
        "Expected configured shells in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[shells]\nzsh = \"zsh\"\n").expect("Failed to write config");

    let output = run_quickterm(
        temp_dir.path(),
        &["--config", config_path.to_str().unwrap(), "bash"],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("available shells: zsh"), "got: {}", stderr);
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "invalid toml [[[");

    let output = run_quickterm(temp_dir.path(), &["ruby"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    // Defaults are in effect after the warning.
    assert!(
        stderr.contains("available shells: haskell, js, python, shell"),
        "Expected default shells in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "term = \"kitty\"\nratio = 0.4\n");

    let output = run_quickterm(temp_dir.path(), &["ruby"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected config warning in stderr: {}",
        stderr
    );
}

#[test]
fn test_invalid_ratio_is_fatal() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "ratio = 1.5\n");

    let output = run_quickterm(temp_dir.path(), &["python"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("Invalid ratio 1.5"), "got: {}", stderr);
    assert!(!stderr.contains("Warning: Could not load config"));
}

#[test]
fn test_zero_spawn_timeout_is_fatal() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "spawn_timeout_ms = 0\n");

    let output = run_quickterm(temp_dir.path(), &["python"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("spawn_timeout_ms must be greater than 0"),
        "got: {}",
        stderr
    );
    assert!(!stderr.contains("Window manager is not running"));
}

#[test]
fn test_window_manager_not_running() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_quickterm(temp_dir.path(), &["python"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Window manager is not running"),
        "got: {}",
        stderr
    );
}

#[test]
fn test_selector_without_window_manager() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_quickterm(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_default_output_is_quiet() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_quickterm(temp_dir.path(), &["ruby"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.stdout.is_empty());
    assert!(
        !stderr.contains("core.app.startup_completed"),
        "Info events should be hidden by default, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_emits_json_events() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_quickterm(temp_dir.path(), &["-v", "ruby"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let startup = stderr
        .lines()
        .find(|line| line.contains("core.app.startup_completed"))
        .unwrap_or_else(|| panic!("Expected startup event in stderr, got: {}", stderr));
    assert!(startup.trim_start().starts_with('{'), "Expected JSON: {}", startup);
}

#[test]
fn test_help_lists_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_i3-quickterm"))
        .arg("--help")
        .output()
        .expect("Failed to execute i3-quickterm");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[SHELL]"), "got: {}", stdout);
    assert!(stdout.contains("--config"), "got: {}", stdout);
}

//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! (FORCEDORO_ENV=dev). The interactive `run` subcommand is exercised
//! through the core integration tests instead.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "forcedoro-cli", "--"])
        .args(args)
        .env("FORCEDORO_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_history_list() {
    let (_, _, code) = run_cli(&["history", "list"]);
    assert_eq!(code, 0, "history list failed");
}

#[test]
fn test_history_list_json() {
    let (stdout, _, code) = run_cli(&["history", "list", "--json"]);
    assert_eq!(code, 0, "history list --json failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("history JSON should parse");
    assert!(parsed.is_array());
}

#[test]
fn test_history_path() {
    let (stdout, _, code) = run_cli(&["history", "path"]);
    assert_eq!(code, 0, "history path failed");
    assert!(stdout.contains("sessions.json"));
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config JSON");
    assert!(parsed.get("notifications").is_some());
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "notifications.enabled"]);
    assert_eq!(code, 0, "config get failed");
    let value = stdout.trim();
    assert!(value == "true" || value == "false");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "ui.dark_mode"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_set_and_get() {
    let (_, _, code) = run_cli(&["config", "set", "notifications.enabled", "true"]);
    assert_eq!(code, 0, "config set failed");
    let (stdout, _, code) = run_cli(&["config", "get", "notifications.enabled"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_config_set_rejects_bad_value() {
    let (_, _, code) = run_cli(&["config", "set", "notifications.enabled", "maybe"]);
    assert_ne!(code, 0);
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("forcedoro"));
}

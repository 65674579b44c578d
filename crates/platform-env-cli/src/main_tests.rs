// crates/platform-env-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and outcome rendering.
// Purpose: Ensure local resolution matches the Lambda outcome contract.
// Dependencies: platform-env-cli main helpers
// ============================================================================

//! ## Overview
//! Resolution tests use `--value` with a config that disables the audit sink,
//! so no parameter store or network access is involved.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::Cli;
use super::Commands;
use super::ConfigCommand;
use super::ResolveCommand;
use super::helm_values_output;
use super::load_config;
use super::resolve_outcome;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Writes a config file that discards audit events.
fn quiet_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("platform-env.toml");
    fs::write(&path, "[audit]\nsink = \"none\"\n").unwrap();
    (dir, path)
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parses_resolve_with_value_override() {
    let cli = Cli::try_parse_from(["platform-env", "resolve", "--value", "staging"]).unwrap();
    let Some(Commands::Resolve(command)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(command.value.as_deref(), Some("staging"));
    assert!(command.config.is_none());
}

#[test]
fn parses_helm_values_and_config_validate() {
    let cli = Cli::try_parse_from(["platform-env", "helm-values", "--config", "a.toml"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::HelmValues(_))));

    let cli = Cli::try_parse_from(["platform-env", "config", "validate"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommand::Validate(_)
        })
    ));
}

#[test]
fn version_flag_is_global() {
    let cli = Cli::try_parse_from(["platform-env", "--version"]).unwrap();
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

#[tokio::test]
async fn value_override_resolves_without_store() {
    let (_dir, config) = quiet_config();
    let command = ResolveCommand {
        config: Some(config),
        value: Some("development".to_string()),
    };
    let outcome = resolve_outcome(&command).await.unwrap();
    assert_eq!(helm_values_output(&outcome), Ok(r#"{"controller": {"replicaCount": 1}}"#));
}

#[tokio::test]
async fn unrecognized_value_gets_standard_sizing() {
    let (_dir, config) = quiet_config();
    let command = ResolveCommand {
        config: Some(config),
        value: Some("Development".to_string()),
    };
    let outcome = resolve_outcome(&command).await.unwrap();
    let payload = serde_json::to_value(&outcome).unwrap();
    assert_eq!(payload["Status"], "SUCCESS");
    assert_eq!(payload["Data"]["HelmValues"], r#"{"controller": {"replicaCount": 2}}"#);
}

#[tokio::test]
async fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let command = ResolveCommand {
        config: Some(dir.path().join("absent.toml")),
        value: Some("production".to_string()),
    };
    let err = resolve_outcome(&command).await.unwrap_err();
    assert!(err.to_string().starts_with("failed to load config:"));
}

#[test]
fn load_config_reports_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[audit]\nsink = \"file\"\n").unwrap();
    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("audit.path is required"));
}

// crates/platform-env-cli/src/main.rs
// ============================================================================
// Module: Platform Environment CLI Entry Point
// Description: Command dispatcher for local environment resolution.
// Purpose: Run the resolver outside Lambda and validate configuration files.
// Dependencies: clap, platform-env-config, platform-env-core, platform-env-ssm,
// serde_json, thiserror, tokio
// ============================================================================

//! ## Overview
//! Operators use this CLI to preview what the Lambda host would return, to
//! feed the Helm values document straight into `helm --values`, and to check a
//! configuration file before deploying it. `--value` replaces the SSM read
//! with an in-memory store holding the given environment value.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use platform_env_config::ResolverConfig;
use platform_env_core::EnvironmentResolver;
use platform_env_core::OperationOutcome;
use platform_env_core::ParameterStore;
use platform_env_core::StaticParameterStore;
use platform_env_ssm::SsmParameterStore;

// ============================================================================
// SECTION: CLI Definitions
// ============================================================================

/// Platform environment resolver CLI.
#[derive(Parser, Debug)]
#[command(name = "platform-env", disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the environment and print the outcome JSON.
    Resolve(ResolveCommand),
    /// Resolve the environment and print only the Helm values document.
    HelmValues(ResolveCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments shared by resolution commands.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Config file path (defaults to `PLATFORM_ENV_CONFIG` or `platform-env.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Environment value to resolve instead of reading the parameter store.
    #[arg(long, value_name = "ENV")]
    value: Option<String>,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate a configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file path (defaults to `PLATFORM_ENV_CONFIG` or `platform-env.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a user-facing message.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("platform-env {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Resolve(command) => command_resolve(&command).await,
        Commands::HelmValues(command) => command_helm_values(&command).await,
        Commands::Config {
            command: ConfigCommand::Validate(command),
        } => command_config_validate(&command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Prints the full outcome JSON; exits non-zero on `FAILED`.
async fn command_resolve(command: &ResolveCommand) -> CliResult<ExitCode> {
    let outcome = resolve_outcome(command).await?;
    let payload = serde_json::to_string(&outcome)
        .map_err(|err| CliError::new(format!("failed to encode outcome: {err}")))?;
    write_stdout_line(&payload).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(exit_code_for(&outcome))
}

/// Prints the Helm values document; a failure reason goes to stderr.
async fn command_helm_values(command: &ResolveCommand) -> CliResult<ExitCode> {
    let outcome = resolve_outcome(command).await?;
    match helm_values_output(&outcome) {
        Ok(document) => {
            write_stdout_line(document).map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => Ok(emit_error(reason)),
    }
}

/// Loads and validates configuration, reporting the source used.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let summary = format!(
        "config ok: audit sink {}, region {}, endpoint {}",
        config.audit.sink.as_str(),
        config.store.region.as_deref().unwrap_or("<environment>"),
        config.store.endpoint.as_deref().unwrap_or("<default>"),
    );
    write_stdout_line(&summary).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration with CLI-friendly error text.
fn load_config(path: Option<&Path>) -> CliResult<ResolverConfig> {
    ResolverConfig::load(path)
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))
}

/// Builds a resolver for the command and performs one resolution.
async fn resolve_outcome(command: &ResolveCommand) -> CliResult<OperationOutcome> {
    let config = load_config(command.config.as_deref())?;
    let audit = config
        .audit
        .build_sink()
        .map_err(|err| CliError::new(format!("failed to open audit sink: {err}")))?;
    let store: Arc<dyn ParameterStore> = match &command.value {
        Some(value) => Arc::new(StaticParameterStore::with_environment(value.clone())),
        None => Arc::new(
            SsmParameterStore::new(&config.store)
                .await
                .map_err(|err| CliError::new(format!("failed to build store: {err}")))?,
        ),
    };
    Ok(EnvironmentResolver::new(store, audit).resolve().await)
}

/// Splits an outcome into the Helm values document or the failure reason.
fn helm_values_output(outcome: &OperationOutcome) -> Result<&str, &str> {
    match outcome {
        OperationOutcome::Success {
            data,
        } => Ok(data.helm_values.as_str()),
        OperationOutcome::Failed {
            reason,
        } => Err(reason.as_str()),
    }
}

/// Maps an outcome to the process exit code.
fn exit_code_for(outcome: &OperationOutcome) -> ExitCode {
    if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Writes an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// crates/platform-env-lambda/src/lib.rs
// ============================================================================
// Module: Platform Environment Lambda Host
// Description: Invocation interface wiring the resolver into Lambda.
// Purpose: Accept opaque events and return the resolver outcome payload.
// Dependencies: lambda_runtime, platform-env-config, platform-env-core,
// platform-env-ssm, serde_json
// ============================================================================

//! ## Overview
//! The host builds one [`EnvironmentResolver`] per cold start from
//! [`ResolverConfig`] and answers every invocation with
//! [`EnvironmentResolver::resolve`]. Event payload and context are accepted
//! but unused. Handler errors are never produced: read faults are already
//! folded into the `FAILED` outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use platform_env_config::ConfigError;
use platform_env_config::ResolverConfig;
use platform_env_core::EnvironmentResolver;
use platform_env_core::OperationOutcome;
use platform_env_ssm::SsmParameterStore;
use platform_env_ssm::SsmStoreError;
use serde_json::Value;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Cold-start errors raised while building the resolver.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Configuration could not be loaded or applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Store client could not be built.
    #[error(transparent)]
    Store(#[from] SsmStoreError),
}

// ============================================================================
// SECTION: Wiring
// ============================================================================

/// Builds the SSM-backed resolver described by `config`.
///
/// # Errors
///
/// Returns [`HostError`] when the audit sink or store client cannot be built.
pub async fn build_resolver(config: &ResolverConfig) -> Result<EnvironmentResolver, HostError> {
    let audit = config.audit.build_sink()?;
    let store = SsmParameterStore::new(&config.store).await?;
    Ok(EnvironmentResolver::new(Arc::new(store), audit))
}

/// Handles one invocation; the event is opaque and ignored.
///
/// # Errors
///
/// Never returns an error; the signature matches the Lambda service contract.
pub async fn handle_event(
    resolver: &EnvironmentResolver,
    _event: LambdaEvent<Value>,
) -> Result<OperationOutcome, lambda_runtime::Error> {
    Ok(resolver.resolve().await)
}

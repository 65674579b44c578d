// crates/platform-env-lambda/src/main.rs
// ============================================================================
// Module: Platform Environment Lambda Entry Point
// Description: Lambda runtime bootstrap for the environment resolver.
// Dependencies: lambda_runtime, platform-env-config, platform-env-lambda, tokio
// ============================================================================

//! ## Overview
//! Loads configuration (built-in defaults when no file is present), builds the
//! resolver once, and serves invocations until the runtime shuts down.

use lambda_runtime::service_fn;
use platform_env_config::ResolverConfig;
use platform_env_lambda::build_resolver;
use platform_env_lambda::handle_event;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = ResolverConfig::load(None)?;
    let resolver = build_resolver(&config).await?;
    lambda_runtime::run(service_fn(|event| handle_event(&resolver, event))).await
}

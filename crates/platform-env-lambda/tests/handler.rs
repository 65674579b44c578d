// crates/platform-env-lambda/tests/handler.rs
// ============================================================================
// Module: Lambda Handler Tests
// Description: Invocation and cold-start tests for the Lambda host.
// Purpose: Ensure opaque events map to the documented outcome payloads.
// ============================================================================

//! ## Overview
//! Drives [`handle_event`] with arbitrary event payloads and checks the JSON
//! the Lambda runtime would return to the caller.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use async_trait::async_trait;
use lambda_runtime::Context;
use lambda_runtime::LambdaEvent;
use platform_env_config::AuditConfig;
use platform_env_config::AuditSinkKind;
use platform_env_config::ResolverConfig;
use platform_env_config::StoreConfig;
use platform_env_core::ConfigurationReadFailure;
use platform_env_core::EnvironmentResolver;
use platform_env_core::NoopAuditSink;
use platform_env_core::ParameterStore;
use platform_env_core::StaticParameterStore;
use platform_env_lambda::HostError;
use platform_env_lambda::build_resolver;
use platform_env_lambda::handle_event;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Store that rejects every read with a fixed message.
struct DeniedStore;

#[async_trait]
impl ParameterStore for DeniedStore {
    async fn get_parameter(&self, _name: &str) -> Result<String, ConfigurationReadFailure> {
        Err(ConfigurationReadFailure::new("AccessDeniedException: not authorized"))
    }
}

/// Builds a resolver over `store` with a no-op audit sink.
fn resolver(store: impl ParameterStore + 'static) -> EnvironmentResolver {
    EnvironmentResolver::new(Arc::new(store), Arc::new(NoopAuditSink))
}

/// Invokes the handler and returns the serialized response.
async fn invoke(resolver: &EnvironmentResolver, payload: Value) -> Value {
    let event = LambdaEvent::new(payload, Context::default());
    let outcome = handle_event(resolver, event).await.unwrap();
    serde_json::to_value(outcome).unwrap()
}

/// Builds a config with a silent audit sink and the given store endpoint.
fn local_config(endpoint: &str, allow_http: bool) -> ResolverConfig {
    ResolverConfig {
        store: StoreConfig {
            region: Some("us-east-1".to_string()),
            endpoint: Some(endpoint.to_string()),
            allow_http,
        },
        audit: AuditConfig {
            sink: AuditSinkKind::None,
            path: None,
        },
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[tokio::test]
async fn empty_event_resolves_development_sizing() {
    let resolver = resolver(StaticParameterStore::with_environment("development"));
    let response = invoke(&resolver, json!({})).await;
    assert_eq!(
        response,
        json!({
            "Status": "SUCCESS",
            "Data": {"HelmValues": "{\"controller\": {\"replicaCount\": 1}}"}
        })
    );
}

#[tokio::test]
async fn event_contents_do_not_affect_outcome() {
    let resolver = resolver(StaticParameterStore::with_environment("production"));
    let empty = invoke(&resolver, json!({})).await;
    let custom_resource = invoke(
        &resolver,
        json!({"RequestType": "Create", "ResourceProperties": {"Environment": "development"}}),
    )
    .await;
    assert_eq!(empty, custom_resource);
    assert_eq!(empty["Data"]["HelmValues"], json!("{\"controller\": {\"replicaCount\": 2}}"));
}

#[tokio::test]
async fn missing_parameter_returns_failed_payload() {
    let resolver = resolver(StaticParameterStore::new());
    let response = invoke(&resolver, Value::Null).await;
    assert_eq!(response["Status"], json!("FAILED"));
    assert!(response["Reason"].as_str().unwrap().contains("/platform/account/env"));
}

#[tokio::test]
async fn store_fault_is_reported_not_raised() {
    let resolver = resolver(DeniedStore);
    let response = invoke(&resolver, json!({})).await;
    assert_eq!(
        response,
        json!({"Status": "FAILED", "Reason": "AccessDeniedException: not authorized"})
    );
}

#[tokio::test]
async fn cold_start_builds_resolver_from_config() {
    let config = local_config("http://localhost:4566", true);
    assert!(build_resolver(&config).await.is_ok());
}

#[tokio::test]
async fn cold_start_rejects_plain_http_without_opt_in() {
    let config = local_config("http://localhost:4566", false);
    let Err(err) = build_resolver(&config).await else {
        panic!("expected store construction to fail");
    };
    assert!(matches!(err, HostError::Store(_)));
    assert!(err.to_string().contains("allow_http"));
}

//! Resolver property-based tests.
//!
//! ## What is covered
//! - Arbitrary non-development values resolve to the standard sizing.
//! - Resolution is a pure function of the stored value.
// crates/platform-env-core/tests/proptest_resolver.rs
// ============================================================================
// Module: Resolver Property-Based Tests
// Description: Randomized checks of the total sizing rule.
// Purpose: Ensure every stored string yields a well-formed success outcome.
// ============================================================================

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

mod common;

use platform_env_core::DEVELOPMENT_MARKER;
use platform_env_core::HelmValues;
use platform_env_core::OperationOutcome;
use platform_env_core::StaticParameterStore;
use proptest::prelude::*;

use crate::common::resolver_over;

/// Resolves `value` once on a fresh current-thread runtime.
fn resolve_value(value: &str) -> OperationOutcome {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let (resolver, _sink) = resolver_over(StaticParameterStore::with_environment(value));
    runtime.block_on(resolver.resolve())
}

proptest! {
    #[test]
    fn non_development_values_get_two_replicas(value in ".{0,64}") {
        prop_assume!(value != DEVELOPMENT_MARKER);
        let outcome = resolve_value(&value);
        let document: HelmValues = serde_json::from_str(outcome.helm_values().unwrap()).unwrap();
        prop_assert_eq!(document.controller.replica_count, 2);
    }

    #[test]
    fn resolution_is_pure_in_stored_value(value in ".{0,64}") {
        prop_assert_eq!(resolve_value(&value), resolve_value(&value));
    }
}

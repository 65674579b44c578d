// crates/platform-env-core/src/resolver.rs
// ============================================================================
// Module: Environment Resolver
// Description: Reads the environment parameter and builds the sizing outcome.
// Purpose: Translate store reads into a tagged outcome with one audit event.
// Dependencies: crate::store, crate::sizing, crate::audit
// ============================================================================

//! ## Overview
//! [`EnvironmentResolver`] performs one read of [`CONFIGURATION_KEY`] per
//! call. The first fault short-circuits to [`OperationOutcome::Failed`]; there
//! are no retries and no state is kept between calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::audit::AuditSink;
use crate::audit::ResolutionAuditEvent;
use crate::outcome::OperationOutcome;
use crate::sizing::HelmValues;
use crate::store::CONFIGURATION_KEY;
use crate::store::ParameterStore;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves the platform environment into Helm sizing values.
///
/// # Invariants
/// - Never returns an error; faults become [`OperationOutcome::Failed`].
/// - Records exactly one audit event per [`EnvironmentResolver::resolve`].
#[derive(Clone)]
pub struct EnvironmentResolver {
    /// Store the environment parameter is read from.
    store: Arc<dyn ParameterStore>,
    /// Sink receiving the per-resolution diagnostic event.
    audit: Arc<dyn AuditSink>,
}

impl EnvironmentResolver {
    /// Creates a resolver over the given store and audit sink.
    #[must_use]
    pub fn new(store: Arc<dyn ParameterStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            audit,
        }
    }

    /// Reads the environment parameter and maps it to an outcome.
    pub async fn resolve(&self) -> OperationOutcome {
        let value = match self.store.get_parameter(CONFIGURATION_KEY).await {
            Ok(value) => value,
            Err(err) => return self.fail(err.message()),
        };
        let helm_values = HelmValues::for_environment(&value);
        match helm_values.encode() {
            Ok(encoded) => {
                self.audit.record(&ResolutionAuditEvent::resolved(
                    CONFIGURATION_KEY,
                    &value,
                    helm_values.controller.replica_count,
                ));
                OperationOutcome::success(encoded)
            }
            Err(err) => self.fail(&format!("failed to encode helm values: {err}")),
        }
    }

    /// Records a failure event and builds the failed outcome.
    fn fail(&self, reason: &str) -> OperationOutcome {
        self.audit.record(&ResolutionAuditEvent::failed(CONFIGURATION_KEY, reason));
        OperationOutcome::failed(reason)
    }
}

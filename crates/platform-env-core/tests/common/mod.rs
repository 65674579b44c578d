// crates/platform-env-core/tests/common/mod.rs
// ============================================================================
// Module: Core Integration Test Helpers
// Description: Shared resolver fixtures for integration tests.
// ============================================================================

#![allow(dead_code, reason = "Shared helpers are not used by every test binary.")]

use std::sync::Arc;
use std::sync::Mutex;

use platform_env_core::AuditSink;
use platform_env_core::EnvironmentResolver;
use platform_env_core::ResolutionAuditEvent;
use platform_env_core::StaticParameterStore;

/// Sink that keeps every recorded event.
#[derive(Default)]
pub struct RecordingSink {
    /// Recorded events.
    pub events: Mutex<Vec<ResolutionAuditEvent>>,
}

impl AuditSink for RecordingSink {
    fn record(&self, event: &ResolutionAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Builds a resolver over a static store plus the sink it records into.
pub fn resolver_over(store: StaticParameterStore) -> (EnvironmentResolver, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let resolver = EnvironmentResolver::new(Arc::new(store), sink.clone());
    (resolver, sink)
}

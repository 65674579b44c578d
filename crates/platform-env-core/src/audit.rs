// crates/platform-env-core/src/audit.rs
// ============================================================================
// Module: Resolution Audit Logging
// Description: Structured audit events for environment resolution.
// Purpose: Emit one diagnostic JSON line per resolution without hard deps.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each resolution records a single [`ResolutionAuditEvent`] holding either the
//! value read from the store or the read failure message. Sinks never affect
//! the resolution outcome: serialization and write failures are dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Resolution audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Parameter name that was read.
    pub parameter_name: String,
    /// Resolution outcome.
    pub outcome: AuditOutcome,
    /// Value read from the store (success only).
    pub environment_value: Option<String>,
    /// Selected replica count (success only).
    pub replica_count: Option<u32>,
    /// Read failure message (failure only).
    pub error: Option<String>,
}

/// Outcome label recorded in audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Resolution succeeded.
    Success,
    /// Resolution failed.
    Failed,
}

impl ResolutionAuditEvent {
    /// Creates an event for a successful read.
    #[must_use]
    pub fn resolved(parameter_name: &str, value: &str, replica_count: u32) -> Self {
        Self {
            event: "environment_resolution",
            timestamp_ms: now_ms(),
            parameter_name: parameter_name.to_string(),
            outcome: AuditOutcome::Success,
            environment_value: Some(value.to_string()),
            replica_count: Some(replica_count),
            error: None,
        }
    }

    /// Creates an event for a failed read.
    #[must_use]
    pub fn failed(parameter_name: &str, error: &str) -> Self {
        Self {
            event: "environment_resolution",
            timestamp_ms: now_ms(),
            parameter_name: parameter_name.to_string(),
            outcome: AuditOutcome::Failed,
            environment_value: None,
            replica_count: None,
            error: Some(error.to_string()),
        }
    }
}

/// Returns the current time in milliseconds since the epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for resolution events.
pub trait AuditSink: Send + Sync {
    /// Record a resolution event.
    fn record(&self, event: &ResolutionAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &ResolutionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &ResolutionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &ResolutionAuditEvent) {}
}

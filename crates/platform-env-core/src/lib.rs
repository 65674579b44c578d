// crates/platform-env-core/src/lib.rs
// ============================================================================
// Module: Platform Environment Core
// Description: Environment-class resolution into Helm sizing values.
// Purpose: Map the platform environment parameter to a tagged outcome.
// Dependencies: async-trait, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate reads the platform environment parameter through a
//! [`ParameterStore`], maps it to a Helm sizing document, and returns an
//! [`OperationOutcome`] that callers branch on instead of catching errors.
//! Invariants:
//! - The parameter name is the fixed [`CONFIGURATION_KEY`].
//! - The sizing rule is total: every string maps to a replica count.
//! - [`EnvironmentResolver::resolve`] never returns an error; read faults become
//!   [`OperationOutcome::Failed`].
//! - Each resolution emits exactly one audit event.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod outcome;
pub mod resolver;
pub mod sizing;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditOutcome;
pub use audit::AuditSink;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::ResolutionAuditEvent;
pub use audit::StderrAuditSink;
pub use outcome::OperationOutcome;
pub use outcome::OutcomeData;
pub use outcome::OutcomeStatus;
pub use resolver::EnvironmentResolver;
pub use sizing::ControllerValues;
pub use sizing::DEVELOPMENT_MARKER;
pub use sizing::EnvironmentClass;
pub use sizing::HelmValues;
pub use store::CONFIGURATION_KEY;
pub use store::ConfigurationReadFailure;
pub use store::ParameterStore;
pub use store::StaticParameterStore;

// crates/platform-env-core/src/store.rs
// ============================================================================
// Module: Parameter Store
// Description: Read-only parameter store interface and in-memory backend.
// Purpose: Decouple resolution from the store client so it can be injected.
// Dependencies: async-trait, thiserror
// ============================================================================

//! ## Overview
//! The resolver reads the environment parameter through [`ParameterStore`].
//! Every read fault, whatever its cause, is reported as a single
//! [`ConfigurationReadFailure`] carrying a human-readable message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Parameter name holding the platform environment class.
pub const CONFIGURATION_KEY: &str = "/platform/account/env";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure to read a parameter from the store.
///
/// # Invariants
/// - Display output is the message, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConfigurationReadFailure {
    /// Fault description.
    message: String,
}

impl ConfigurationReadFailure {
    /// Creates a read failure from a fault description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the failure reported for an absent parameter.
    #[must_use]
    pub fn not_found(name: &str) -> Self {
        Self::new(format!("parameter {name} not found"))
    }

    /// Returns the fault description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Read-only key-value parameter store.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Reads the string value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationReadFailure`] when the parameter is absent or the
    /// store cannot be read.
    async fn get_parameter(&self, name: &str) -> Result<String, ConfigurationReadFailure>;
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory parameter store with fixed contents.
#[derive(Debug, Clone, Default)]
pub struct StaticParameterStore {
    /// Parameter values keyed by name.
    values: BTreeMap<String, String>,
}

impl StaticParameterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `value` under [`CONFIGURATION_KEY`].
    #[must_use]
    pub fn with_environment(value: impl Into<String>) -> Self {
        Self::new().with_parameter(CONFIGURATION_KEY, value)
    }

    /// Adds a parameter to the store.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl ParameterStore for StaticParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<String, ConfigurationReadFailure> {
        self.values.get(name).cloned().ok_or_else(|| ConfigurationReadFailure::not_found(name))
    }
}

// crates/platform-env-config/src/lib.rs
// ============================================================================
// Module: Platform Environment Config
// Description: Canonical configuration model for the resolver host and CLI.
// Purpose: Single source of truth for store client and audit sink settings.
// Dependencies: platform-env-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! This crate defines the TOML configuration consumed by the Lambda host and
//! the operator CLI, including strict validation and audit sink construction.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::AuditSinkKind;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::ResolverConfig;
pub use config::StoreConfig;

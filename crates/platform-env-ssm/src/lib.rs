// crates/platform-env-ssm/src/lib.rs
// ============================================================================
// Module: Platform Environment SSM
// Description: AWS Systems Manager backend for the parameter store seam.
// Purpose: Provide the production store used by the Lambda host and CLI.
// Dependencies: aws-config, aws-sdk-ssm, platform-env-core
// ============================================================================

//! ## Overview
//! Exposes [`SsmParameterStore`], the AWS-backed implementation of
//! [`platform_env_core::ParameterStore`].

pub mod store;

pub use store::SsmParameterStore;
pub use store::SsmStoreError;

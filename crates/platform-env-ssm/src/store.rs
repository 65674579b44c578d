// crates/platform-env-ssm/src/store.rs
// ============================================================================
// Module: SSM Parameter Store
// Description: AWS Systems Manager Parameter Store backend.
// Purpose: Read platform parameters through the AWS SDK with a single attempt.
// Dependencies: aws-config, aws-sdk-ssm, platform-env-config, platform-env-core
// ============================================================================

//! ## Overview
//! [`SsmParameterStore`] implements [`ParameterStore`] over `GetParameter`.
//! SDK retries are disabled so one resolution issues at most one request; the
//! invoking host enforces any timeout. Every SDK fault is flattened into a
//! [`ConfigurationReadFailure`] whose message names the parameter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::config::retry::RetryConfig;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::types::Parameter;
use platform_env_config::StoreConfig;
use platform_env_core::ConfigurationReadFailure;
use platform_env_core::ParameterStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing the SSM store.
#[derive(Debug, thiserror::Error)]
pub enum SsmStoreError {
    /// Invalid store configuration.
    #[error("ssm store invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// SSM-backed parameter store.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    /// SSM client handle.
    client: Client,
}

impl SsmParameterStore {
    /// Builds a store from configuration and the AWS environment chain.
    ///
    /// # Errors
    ///
    /// Returns [`SsmStoreError`] when the configuration is invalid.
    pub async fn new(config: &StoreConfig) -> Result<Self, SsmStoreError> {
        config.validate().map_err(|err| SsmStoreError::Invalid(err.to_string()))?;
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.trim().to_string()));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.trim());
        }
        let shared_config = loader.load().await;
        Ok(Self::from_shared_config(&shared_config))
    }

    /// Builds a store from loaded AWS configuration with SDK retries disabled.
    #[must_use]
    pub fn from_shared_config(shared_config: &SdkConfig) -> Self {
        let ssm_config = aws_sdk_ssm::config::Builder::from(shared_config)
            .retry_config(RetryConfig::standard().with_max_attempts(1))
            .build();
        Self::from_client(Client::from_conf(ssm_config))
    }

    /// Wraps an existing SSM client.
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<String, ConfigurationReadFailure> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .send()
            .await
            .map_err(|err| read_failure(name, &err.into_service_error()))?;
        output
            .parameter()
            .and_then(Parameter::value)
            .map(str::to_string)
            .ok_or_else(|| ConfigurationReadFailure::new(format!("parameter {name} returned no value")))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps a `GetParameter` error to a read failure naming the parameter.
///
/// The service's own fault text is appended to the synthesized prefix.
pub(crate) fn read_failure(name: &str, err: &GetParameterError) -> ConfigurationReadFailure {
    if err.is_parameter_not_found() {
        return ConfigurationReadFailure::new(format!(
            "parameter {name} not found: {}",
            DisplayErrorContext(err)
        ));
    }
    ConfigurationReadFailure::new(format!(
        "failed to read parameter {name}: {}",
        DisplayErrorContext(err)
    ))
}

// crates/platform-env-core/src/outcome.rs
// ============================================================================
// Module: Operation Outcome
// Description: Tagged success/failure record returned by the resolver.
// Purpose: Give callers a uniform two-shape result instead of raised errors.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`OperationOutcome`] serializes to exactly one of two wire shapes:
//! `{"Status": "SUCCESS", "Data": {"HelmValues": "..."}}` or
//! `{"Status": "FAILED", "Reason": "..."}`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    /// Resolution produced Helm values.
    Success,
    /// Resolution failed to read the environment parameter.
    Failed,
}

/// Success payload carried under `Data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeData {
    /// Encoded Helm values document.
    #[serde(rename = "HelmValues")]
    pub helm_values: String,
}

/// Tagged result of one environment resolution.
///
/// # Invariants
/// - Exactly one shape is produced per resolution.
/// - `Failed::reason` is the underlying fault's message, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Status")]
pub enum OperationOutcome {
    /// Successful resolution.
    #[serde(rename = "SUCCESS")]
    Success {
        /// Encoded sizing payload.
        #[serde(rename = "Data")]
        data: OutcomeData,
    },
    /// Failed resolution.
    #[serde(rename = "FAILED")]
    Failed {
        /// Failure description.
        #[serde(rename = "Reason")]
        reason: String,
    },
}

impl OperationOutcome {
    /// Builds a success outcome from an encoded Helm values document.
    #[must_use]
    pub const fn success(helm_values: String) -> Self {
        Self::Success {
            data: OutcomeData {
                helm_values,
            },
        }
    }

    /// Builds a failure outcome from a fault message.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Returns the status label of the outcome.
    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        match self {
            Self::Success {
                ..
            } => OutcomeStatus::Success,
            Self::Failed {
                ..
            } => OutcomeStatus::Failed,
        }
    }

    /// Returns true for a success outcome.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the encoded Helm values when the outcome succeeded.
    #[must_use]
    pub fn helm_values(&self) -> Option<&str> {
        match self {
            Self::Success {
                data,
            } => Some(data.helm_values.as_str()),
            Self::Failed {
                ..
            } => None,
        }
    }

    /// Returns the failure reason when the outcome failed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success {
                ..
            } => None,
            Self::Failed {
                reason,
            } => Some(reason.as_str()),
        }
    }
}

// crates/platform-env-core/src/sizing.rs
// ============================================================================
// Module: Helm Sizing Rule
// Description: Environment classification and the Helm sizing document.
// Purpose: Provide a total mapping from environment strings to replica counts.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The sizing rule classifies the environment string into an
//! [`EnvironmentClass`] and derives the ingress controller replica count from
//! it. Only the exact, case-sensitive literal [`DEVELOPMENT_MARKER`] selects the
//! development sizing; every other string, including unrecognized ones, gets
//! the standard sizing.
//!
//! The encoded document uses `": "` and `", "` separators so the emitted text
//! matches what existing deployment tooling already consumes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;

use serde::Deserialize;
use serde::Serialize;
use serde_json::ser::Formatter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment value that selects the development sizing.
pub const DEVELOPMENT_MARKER: &str = "development";
/// Controller replicas for development environments.
const DEVELOPMENT_REPLICAS: u32 = 1;
/// Controller replicas for every other environment.
const STANDARD_REPLICAS: u32 = 2;

// ============================================================================
// SECTION: Environment Classification
// ============================================================================

/// Environment classes recognized by the sizing rule.
///
/// # Invariants
/// - Classification is total over all strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentClass {
    /// Exactly [`DEVELOPMENT_MARKER`].
    Development,
    /// Any other value (production, staging, empty, malformed).
    Standard,
}

impl EnvironmentClass {
    /// Classifies a raw environment value.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        if value == DEVELOPMENT_MARKER { Self::Development } else { Self::Standard }
    }

    /// Returns the controller replica count for the class.
    #[must_use]
    pub const fn replica_count(self) -> u32 {
        match self {
            Self::Development => DEVELOPMENT_REPLICAS,
            Self::Standard => STANDARD_REPLICAS,
        }
    }
}

// ============================================================================
// SECTION: Helm Values
// ============================================================================

/// Helm values document sizing the ingress controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelmValues {
    /// Controller settings.
    pub controller: ControllerValues,
}

/// Controller section of the Helm values document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ControllerValues {
    /// Number of controller replicas.
    pub replica_count: u32,
}

impl HelmValues {
    /// Builds the sizing document for a raw environment value.
    #[must_use]
    pub fn for_environment(value: &str) -> Self {
        Self::for_class(EnvironmentClass::classify(value))
    }

    /// Builds the sizing document for an environment class.
    #[must_use]
    pub const fn for_class(class: EnvironmentClass) -> Self {
        Self {
            controller: ControllerValues {
                replica_count: class.replica_count(),
            },
        }
    }

    /// Encodes the document as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Single-line JSON formatter with a space after `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

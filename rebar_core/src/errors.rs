//! # Error Types
//!
//! Structured error types for rebar_core. Only configuration construction can
//! fail; once an [`EvaluationConfig`](crate::config::EvaluationConfig) exists,
//! every length formula is total.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::config::{ConfigInput, EvaluationConfig};
//! use rebar_core::errors::CalcError;
//!
//! let err = EvaluationConfig::resolve(ConfigInput::new().with_preset("Australia")).unwrap_err();
//! assert!(matches!(err, CalcError::UnknownPreset { .. }));
//! assert_eq!(err.error_code(), "UNKNOWN_PRESET");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for configuration and input handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Requested preset is not in the built-in catalog
    #[error("Preset undefined: '{preset}'")]
    UnknownPreset { preset: String },

    /// Requested code edition is not in the supported allow-list
    #[error("Code edition not recognized or supported: '{edition}'")]
    UnsupportedCodeEdition { edition: String },

    /// An input value is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownPreset error
    pub fn unknown_preset(preset: impl Into<String>) -> Self {
        CalcError::UnknownPreset {
            preset: preset.into(),
        }
    }

    /// Create an UnsupportedCodeEdition error
    pub fn unsupported_code_edition(edition: impl Into<String>) -> Self {
        CalcError::UnsupportedCodeEdition {
            edition: edition.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from the configuration bundle itself
    /// (as opposed to malformed JSON).
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, CalcError::SerializationError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownPreset { .. } => "UNKNOWN_PRESET",
            CalcError::UnsupportedCodeEdition { .. } => "UNSUPPORTED_CODE_EDITION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fc", "-4000", "Concrete strength must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_preset("Australia").error_code(), "UNKNOWN_PRESET");
        assert_eq!(
            CalcError::unsupported_code_edition("BadCode").error_code(),
            "UNSUPPORTED_CODE_EDITION"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::unknown_preset("Australia").to_string(),
            "Preset undefined: 'Australia'"
        );
        assert!(CalcError::unsupported_code_edition("318-08")
            .to_string()
            .starts_with("Code edition not recognized or supported"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(!err.is_configuration_error());
    }
}

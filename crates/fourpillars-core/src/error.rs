//! Core error types for fourpillars-core.
//!
//! This module defines the error hierarchy using thiserror. Input problems
//! (`InvalidInput`) are always surfaced to the caller; lookup misses against
//! tables that are meant to be exhaustive (`UnknownStem`, `UnknownBranch`)
//! propagate as hard errors instead of falling back to a default.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fourpillars-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed birth data or query parameters
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A stem key that no table knows about
    #[error("Unknown stem: {0}")]
    UnknownStem(String),

    /// A branch key that no table knows about
    #[error("Unknown branch: {0}")]
    UnknownBranch(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors for caller-supplied values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Year/month/day do not form a calendar date
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hour outside 0..=23
    #[error("hour {0} is out of range (expected 0-23)")]
    HourOutOfRange(u32),

    /// Month outside 1..=12
    #[error("month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key not present in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home directory could not be resolved
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidDate { year: 2023, month: 2, day: 30 };
        assert_eq!(err.to_string(), "2023-02-30 is not a valid calendar date");

        let err = ValidationError::HourOutOfRange(24);
        assert!(err.to_string().contains("24"));
    }

    #[test]
    fn test_core_error_wraps_validation() {
        let err: CoreError = ValidationError::MonthOutOfRange(13).into();
        assert!(matches!(err, CoreError::InvalidInput(ValidationError::MonthOutOfRange(13))));
        assert!(err.to_string().starts_with("Invalid input"));
    }
}

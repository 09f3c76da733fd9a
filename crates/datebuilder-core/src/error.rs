//! Core error types for datebuilder-core.
//!
//! Builders never fail mid-chain: provider failures on those paths degrade to
//! the distant-future sentinel. The errors below are reserved for the places
//! that hand a definite value back to the caller.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::calendar::{CalendarUnit, DateComponents};

/// Core error type for datebuilder-core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateBuilderError {
    /// The components do not denote any instant in the active calendar
    #[error("Invalid date components: {0:?}")]
    InvalidComponents(DateComponents),

    /// The provider could not represent the result of an addition
    #[error("Cannot add {amount} {unit:?} to {date}")]
    Unrepresentable {
        amount: i64,
        unit: CalendarUnit,
        date: DateTime<Utc>,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Random time bounds out of order
    #[error("Invalid time range: upper bound ({upper}) must be after lower bound ({lower})")]
    InvalidTimeRange { lower: String, upper: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Time zone identifier not present in the IANA database
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for DateBuilderError
pub type Result<T, E = DateBuilderError> = std::result::Result<T, E>;

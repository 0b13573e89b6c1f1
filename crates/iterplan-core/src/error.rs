//! Core error types for iterplan-core.
//!
//! The burndown entry point never surfaces these to its caller; they are used
//! by the fallible helpers underneath it, by configuration handling, and by
//! the estimation session rules.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for iterplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Estimation session errors
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Key does not exist in the configuration schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for values crossing the library boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Timestamp string could not be parsed as ISO-8601
    #[error("Invalid timestamp for '{field}': {value:?}")]
    InvalidTimestamp { field: String, value: String },

    /// Unknown t-shirt size label
    #[error("Unknown size '{0}' (expected SM, MD, LG or XLG)")]
    UnknownSize(String),

    /// Unknown task status label
    #[error("Unknown task status '{0}' (expected pending, in_progress or completed)")]
    UnknownStatus(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn timestamp(field: &str, value: &str) -> Self {
        ValidationError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Rule violations inside an estimation session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// Only the session manager may perform this action
    #[error("Only the session manager can {action}")]
    NotManager { action: &'static str },

    /// Actor has not joined the session
    #[error("'{0}' has not joined the session")]
    NotParticipant(String),

    /// Votes are only accepted while a round is active
    #[error("Session is not active")]
    RoundNotActive,

    /// Vote targets a task other than the one being estimated
    #[error("Task '{task_id}' is not currently being estimated")]
    TaskNotCurrent { task_id: String },

    /// Vote is not a valid three-point estimate
    #[error("Invalid estimate: {0}")]
    InvalidVote(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

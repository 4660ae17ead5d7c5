//! Core error types for studyplan-core.
//!
//! Every failure the library can surface is one of four kinds: invalid
//! input, an unparseable date, a file I/O failure, or a preferences problem.
//! All of them are detected synchronously and returned to the caller as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected before or during allocation/rendering
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A date string that is not `YYYY-MM-DD`
    #[error("Invalid date '{input}': expected YYYY-MM-DD ({source})")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Writing the plan file failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already-open stream failed
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Weights summing to zero leave nothing to divide by
    #[error("Total weight of {count} course(s) is zero")]
    ZeroTotalWeight { count: usize },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Date arithmetic ran past the end of the calendar
    #[error("Date out of range: {start} + {days} day(s)")]
    DateOutOfRange { start: chrono::NaiveDate, days: u64 },
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

    /// Key not present in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl CoreError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

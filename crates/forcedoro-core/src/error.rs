//! Error types for forcedoro-core.
//!
//! Validation failures are recovered locally and surfaced to the user;
//! persistence failures carry path context so the caller can decide whether
//! to warn and continue or stop. There are no retries anywhere.

use std::path::PathBuf;
use thiserror::Error;

/// Umbrella error type for the crate.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("session log error: {0}")]
    History(#[from] HistoryError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected `start` input. Never changes timer state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter what you are working on")]
    EmptyTask,

    #[error("'{input}' is not a valid number of minutes")]
    MinutesNotANumber { input: String },

    #[error(
        "please enter a time between 1 and {} minutes",
        crate::timer::MAX_WORK_MINUTES
    )]
    MinutesOutOfRange { minutes: u32 },

    #[error("a session is already in progress")]
    SessionActive,
}

/// Session log failures.
///
/// `Corrupt` exists so callers can surface a warning before electing to
/// continue with an empty history instead of silently dropping it.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to read session log at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session log at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode session log: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write session log at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine data directory: {0}")]
    DataDir(String),

    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

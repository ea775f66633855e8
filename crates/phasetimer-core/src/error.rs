//! Core error types for phasetimer-core.

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::TimerState;

/// Core error type for phasetimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine command issued in an invalid state
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration and preset errors.
///
/// Validation failures are never recovered automatically; the caller must
/// fix the configuration before retrying.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A phase duration was configured negative
    #[error("Invalid duration for '{field}': {value} (must be non-negative)")]
    NegativeDuration { field: &'static str, value: i64 },

    /// A set/session count was configured below 1
    #[error("Invalid count for '{field}': {value} (must be at least 1)")]
    CountTooSmall { field: &'static str, value: u32 },

    /// Failed to load the preset file
    #[error("Failed to load presets from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the preset file
    #[error("Failed to save presets to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown preset name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Engine command errors.
///
/// Only `start` fails; pause/resume/skip in invalid states are defined as
/// no-ops since user-driven UI races are expected.
#[derive(Error, Debug)]
pub enum EngineError {
    /// `start` called on an engine that is not idle
    #[error("Timer already started (state: {state:?}); reset before starting a new session")]
    AlreadyStarted { state: TimerState },

    /// Sequence violated the non-empty invariant
    #[error("Phase sequence is empty")]
    EmptySequence,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

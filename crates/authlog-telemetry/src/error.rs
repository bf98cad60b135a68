//! Telemetry error types.

use thiserror::Error;

/// Errors raised while configuring or installing the logger.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The logging configuration was invalid.
    #[error("invalid logging configuration: {0}")]
    Config(String),

    /// A log output destination could not be opened.
    #[error("failed to open log output {path}: {reason}")]
    OpenOutput {
        /// The output path that failed to open.
        path: String,
        /// Why the open failed.
        reason: String,
    },

    /// The global subscriber could not be installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

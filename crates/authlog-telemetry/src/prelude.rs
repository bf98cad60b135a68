//! Commonly used types for convenient import.
//!
//! Use `use authlog_telemetry::prelude::*;` to import all essential types.

// Errors
pub use crate::{TelemetryError, TelemetryResult};

// Logging configuration
pub use crate::{LogConfig, LogOutput, TIME_FORMAT};

// Setup functions
pub use crate::{setup_default_logging, setup_logging, setup_logging_to};

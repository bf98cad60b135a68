//! Logger setup for the auth service.
//!
//! Wraps `tracing-subscriber` so every service binary logs the same way:
//! JSON lines, UTC ISO-8601 timestamps with a numeric zone offset, caller
//! info, and one encoder per configured output (stderr, stdout, or
//! append-mode files). Setup failures (bad filter directives, unopenable
//! outputs, double install) are returned to the caller, never swallowed.
//!
//! # Example
//!
//! ```rust,no_run
//! use authlog_telemetry::{LogConfig, LogOutput, setup_logging};
//!
//! # fn main() -> Result<(), authlog_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_output(LogOutput::File("/var/log/auth/auth.log".into()))
//!     .with_directive("hyper=warn");
//!
//! setup_logging(&config)?;
//!
//! tracing::info!("service started");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    LogConfig, LogOutput, TIME_FORMAT, setup_default_logging, setup_logging, setup_logging_to,
};

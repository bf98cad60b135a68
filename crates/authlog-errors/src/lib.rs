//! Error vocabulary and structured log-message resolution for the auth
//! service.
//!
//! Every error condition in the service is identified by an
//! `(error source, error code, sub-code)` triple drawn from a closed
//! vocabulary ([`source`], [`code`]). [`resolve`] maps a triple plus optional
//! context (an underlying cause, ordered extra arguments) to a human-readable
//! message and machine-queryable [`Field`]s; [`LogError`] carries all of it up
//! the call stack so the handling site can log one line with structured
//! metadata attached.
//!
//! Resolution is total: unrecognized codes fall back to a per-source message,
//! unrecognized sources to a global one. Building an error never fails.
//!
//! # Example
//!
//! ```
//! use authlog_errors::{code, source, LogError};
//!
//! fn generate_token() -> Result<String, LogError> {
//!     Err(LogError::new(source::JWT, code::TOKEN_EXPIRED))
//! }
//!
//! if let Err(err) = generate_token() {
//!     assert_eq!(err.message(), "JWT is expired");
//!     err.emit();
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod code;
pub mod prelude;
pub mod source;

mod catalog;
mod field;
mod log_error;

pub use catalog::{Resolution, resolve};
pub use field::{Field, FieldKey};
pub use log_error::{Cause, LogError};

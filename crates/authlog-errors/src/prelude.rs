//! Commonly used types for convenient import.
//!
//! Use `use authlog_errors::prelude::*;` to import all essential types.

// Vocabulary
pub use crate::{code, source};

// Resolution
pub use crate::{Resolution, resolve};

// Error value and fields
pub use crate::{Cause, Field, FieldKey, LogError};

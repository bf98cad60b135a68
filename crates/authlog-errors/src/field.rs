//! Structured fields attached to log lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a structured field.
///
/// The set is closed: log consumers query on these names, so they never
/// change shape per error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Subsystem the error originated in.
    ErrorSource,
    /// Condition identifier within the source.
    ErrorCode,
    /// Optional qualifier for the condition.
    ErrorSubCode,
}

impl FieldKey {
    /// The field name as it appears on the log line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErrorSource => "error_source",
            Self::ErrorCode => "error_code",
            Self::ErrorSubCode => "error_sub_code",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed key-value pair attached to a log line, independent of the
/// human-readable message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field key.
    pub key: FieldKey,
    /// Field value.
    pub value: String,
}

impl Field {
    /// Create a field.
    #[must_use]
    pub fn new(key: FieldKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

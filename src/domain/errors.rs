//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Every variant names the field that failed so callers can map the error
/// back to an input control without parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was empty or whitespace-only.
    #[error("{field} is required")]
    MissingValue { field: &'static str },

    /// The value does not have the expected shape.
    #[error("Invalid {field}: {input}")]
    InvalidFormat { field: &'static str, input: String },

    /// The measured length is outside the allowed range.
    #[error("{field} must be between {min} and {max} characters long, got {actual}")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingValue { field }
    }

    pub(crate) fn invalid(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            input: input.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingValue { field }
            | Self::InvalidFormat { field, .. }
            | Self::LengthOutOfRange { field, .. } => field,
        }
    }
}

//! Cross-cutting error types for the grade crates.
//!
//! Storage-specific errors (`DatabaseError`) live in `grade-db`; the errors
//! here can be raised before any storage call is made.

use thiserror::Error;

/// Errors that can be raised by any grade crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A caller-supplied identifier or filter value is malformed.
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_argument_names_the_field() {
        let err = CoreError::invalid_argument("class_id", "'x' is not an integer");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'class_id': 'x' is not an integer"
        );
    }

    #[test]
    fn validation_carries_the_reason() {
        let err = CoreError::Validation("score type must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation error: score type must not be empty"
        );
    }
}

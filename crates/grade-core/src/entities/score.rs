use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One graded component within a grade record (an exam, a quiz, ...).
///
/// The value is not range-checked; only its type and finiteness matter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Score {
    /// Category label, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
}

impl Score {
    /// Build a validated score entry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the label is blank or the value is
    /// not finite.
    pub fn new(kind: impl Into<String>, score: f64) -> Result<Self, CoreError> {
        let score = Self {
            kind: kind.into(),
            score,
        };
        score.validate()?;
        Ok(score)
    }

    /// Check the invariants a stored score must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.kind.trim().is_empty() {
            return Err(CoreError::Validation(
                "score type must be a non-empty string".into(),
            ));
        }
        if !self.score.is_finite() {
            return Err(CoreError::Validation(format!(
                "score value must be a finite number, got {}",
                self.score
            )));
        }
        Ok(())
    }
}

//! Validated caller inputs.
//!
//! Every payload that reaches the store passes through one of these types.
//! Loosely-typed JSON is schema-checked in `grade-schema`, deserialized into
//! these structs, then validated here before any storage call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{NewGrade, Score};
use crate::enums::TotalCountBasis;
use crate::errors::CoreError;

/// Threshold used by statistics queries unless the caller overrides it.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

// ---------------------------------------------------------------------------
// GradeDocument
// ---------------------------------------------------------------------------

/// Create payload for a grade record.
///
/// Older producers send `student_id` instead of `learner_id`. On
/// [`normalize`](Self::normalize) the legacy value is moved into `learner_id`
/// (it wins when both are present) and the legacy field is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GradeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learner_id: Option<i64>,
    /// Deprecated alias of `learner_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<Score>>,
}

impl GradeDocument {
    /// Apply the legacy rename and check required fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if no learner id (current or legacy),
    /// no `class_id`, or no `scores` array is present, or if any score entry
    /// is invalid.
    pub fn normalize(self) -> Result<NewGrade, CoreError> {
        let learner_id = self.student_id.or(self.learner_id).ok_or_else(|| {
            CoreError::Validation("learner_id is required (or legacy student_id)".into())
        })?;
        let class_id = self
            .class_id
            .ok_or_else(|| CoreError::Validation("class_id is required".into()))?;
        let scores = self
            .scores
            .ok_or_else(|| CoreError::Validation("scores is required".into()))?;
        for score in &scores {
            score.validate()?;
        }
        Ok(NewGrade::new(learner_id, class_id, scores))
    }
}

// ---------------------------------------------------------------------------
// ScoreMatch
// ---------------------------------------------------------------------------

/// Removal criteria for score entries. An entry is removed when every
/// named field equals the entry's field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoreMatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ScoreMatch {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if the match names no field (it
    /// would remove every entry) or names a non-finite score.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.kind.is_none() && self.score.is_none() {
            return Err(CoreError::invalid_argument(
                "score_match",
                "must name a type, a score, or both",
            ));
        }
        if self.score.is_some_and(|s| !s.is_finite()) {
            return Err(CoreError::invalid_argument(
                "score_match",
                "score must be a finite number",
            ));
        }
        Ok(())
    }
}

impl From<Score> for ScoreMatch {
    fn from(score: Score) -> Self {
        Self {
            kind: Some(score.kind),
            score: Some(score.score),
        }
    }
}

// ---------------------------------------------------------------------------
// ClassUpdate
// ---------------------------------------------------------------------------

/// Body of a bulk class id change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassUpdate {
    pub class_id: i64,
}

// ---------------------------------------------------------------------------
// StatsQuery
// ---------------------------------------------------------------------------

/// Parameters of a threshold statistics query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatsQuery {
    /// Restrict the population to one class. `None` aggregates every class.
    pub class_id: Option<i64>,
    /// Learners whose average is strictly greater than this qualify.
    pub threshold: f64,
    pub total_count: TotalCountBasis,
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            class_id: None,
            threshold: DEFAULT_THRESHOLD,
            total_count: TotalCountBasis::default(),
        }
    }
}

impl StatsQuery {
    #[must_use]
    pub fn all_classes() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_class(class_id: i64) -> Self {
        Self {
            class_id: Some(class_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_total_count(mut self, basis: TotalCountBasis) -> Self {
        self.total_count = basis;
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if the threshold is not finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.threshold.is_finite() {
            Ok(())
        } else {
            Err(CoreError::invalid_argument(
                "threshold",
                format!("must be a finite number, got {}", self.threshold),
            ))
        }
    }
}

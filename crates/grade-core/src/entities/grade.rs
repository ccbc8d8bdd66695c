use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Score;
use crate::ids::GradeId;

/// One learner's score entries for one class.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Grade {
    pub id: GradeId,
    pub learner_id: i64,
    pub class_id: i64,
    pub scores: Vec<Score>,
}

/// A grade record ready for insertion; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewGrade {
    pub learner_id: i64,
    pub class_id: i64,
    pub scores: Vec<Score>,
}

impl NewGrade {
    #[must_use]
    pub const fn new(learner_id: i64, class_id: i64, scores: Vec<Score>) -> Self {
        Self {
            learner_id,
            class_id,
            scores,
        }
    }

    /// Attach the storage-generated id.
    #[must_use]
    pub fn with_id(self, id: GradeId) -> Grade {
        Grade {
            id,
            learner_id: self.learner_id,
            class_id: self.class_id,
            scores: self.scores,
        }
    }
}

//! Response payloads returned as JSON by `grades` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::GradeId;

/// Learners above the threshold among a population of grade records.
///
/// Field names keep the established report shape (`count_above_70`, ...)
/// regardless of the threshold actually used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ThresholdStats {
    #[serde(rename = "count_above_70")]
    pub count_above: u64,
    pub total_count: u64,
    #[serde(rename = "percentage_above_70")]
    pub percentage_above: f64,
}

/// Response from `grades create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreatedResponse {
    pub id: GradeId,
}

/// Response from bulk mutations (`delete-learner`, `move-class`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AffectedResponse {
    pub affected: u64,
}

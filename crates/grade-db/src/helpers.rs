//! Row-to-entity parsing and parameter helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed structs.
//! These helpers isolate that parsing and the JSON handling of the `scores`
//! column.

use grade_core::entities::{Grade, Score};
use grade_core::ids::GradeId;

use crate::error::DatabaseError;

/// Column list matching [`row_to_grade`].
pub const GRADE_COLUMNS: &str = "id, learner_id, class_id, scores";

/// Parse a `grades` row selected with [`GRADE_COLUMNS`].
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a stored value cannot be parsed.
pub fn row_to_grade(row: &libsql::Row) -> Result<Grade, DatabaseError> {
    let id = row.get::<String>(0)?;
    Ok(Grade {
        id: GradeId::parse(&id)
            .map_err(|e| DatabaseError::Query(format!("Stored grade id '{id}' is invalid: {e}")))?,
        learner_id: row.get::<i64>(1)?,
        class_id: row.get::<i64>(2)?,
        scores: parse_scores(&row.get::<String>(3)?)?,
    })
}

/// Parse the JSON array held in the `scores` column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not an array of scores.
pub fn parse_scores(s: &str) -> Result<Vec<Score>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid scores JSON in column: {e}")))
}

/// Serialize scores for the `scores` column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn scores_to_json(scores: &[Score]) -> Result<String, DatabaseError> {
    serde_json::to_string(scores).map_err(|e| DatabaseError::Other(e.into()))
}

/// Bind an optional integer filter, mapping `None` to SQL NULL.
#[must_use]
pub fn opt_integer(value: Option<i64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Integer)
}

/// Bind an optional text filter, mapping `None` to SQL NULL.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

/// Bind an optional real filter, mapping `None` to SQL NULL.
#[must_use]
pub fn opt_real(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

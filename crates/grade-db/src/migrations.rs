//! Database migration runner and administrative DDL.
//!
//! Embeds the SQL files at compile time. All statements use `IF NOT EXISTS`
//! for idempotent re-running.

use crate::GradeDb;
use crate::error::DatabaseError;

/// Base schema: the `grades` table.
const MIGRATION_001: &str = include_str!("../migrations/001_grades.sql");

/// Lookup indexes on `class_id`, `learner_id`, and `(learner_id, class_id)`.
pub(crate) const INDEXES: &str = include_str!("../migrations/indexes.sql");

/// Validator triggers enforcing the grade row contract.
pub(crate) const VALIDATOR: &str = include_str!("../migrations/validator.sql");

impl GradeDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| match DatabaseError::from(e) {
                unavailable @ DatabaseError::StorageUnavailable(_) => unavailable,
                other => DatabaseError::Migration(format!("001_grades: {other}")),
            })?;
        Ok(())
    }
}

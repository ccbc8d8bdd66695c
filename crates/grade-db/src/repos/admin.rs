//! Administrative operations: lookup indexes and the validator contract.
//!
//! Both are idempotent and meant to run once at deployment, never from the
//! per-request path.

use crate::error::DatabaseError;
use crate::migrations::{INDEXES, VALIDATOR};
use crate::service::GradeStore;

impl GradeStore {
    /// Create the `class_id`, `learner_id`, and `(learner_id, class_id)`
    /// indexes if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DDL fails.
    pub async fn ensure_indexes(&self) -> Result<(), DatabaseError> {
        self.db().conn().execute_batch(INDEXES).await?;
        tracing::info!("grade indexes ensured");
        Ok(())
    }

    /// Install the validator triggers that reject rows with a non-integer
    /// `learner_id`/`class_id` or a malformed `scores` array.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DDL fails.
    pub async fn install_schema(&self) -> Result<(), DatabaseError> {
        self.db().conn().execute_batch(VALIDATOR).await?;
        tracing::info!("grade validator installed");
        Ok(())
    }

    /// Names of installed indexes and triggers on the `grades` table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the catalog query fails.
    pub async fn admin_objects(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT name FROM sqlite_master
                 WHERE tbl_name = 'grades' AND type IN ('index', 'trigger') AND sql IS NOT NULL
                 ORDER BY name",
                (),
            )
            .await?;

        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>(0)?);
        }
        Ok(names)
    }
}

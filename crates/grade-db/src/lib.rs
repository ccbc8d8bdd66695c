//! # grade-db
//!
//! libSQL storage for grade records and the threshold aggregation engine.
//!
//! Grade records live in a single `grades` table whose `scores` column holds a
//! JSON array. Array operators (append, pull by match) and the aggregation
//! pipeline (unwind, group, filter, project) are expressed with `SQLite`'s
//! JSON functions so every operation is one statement against the engine.
//!
//! `GradeDb` is the raw handle; `GradeStore` (see [`service`]) carries the
//! repository and aggregation methods.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use grade_core::ids::{GRADE_ID_HEX_LEN, GradeId, PREFIX_GRADE};
use libsql::Builder;

/// Central database handle for grade storage.
///
/// Wraps a libSQL database and connection. Opening a handle creates the base
/// table; indexes and the validator are installed separately (see
/// [`GradeStore::ensure_indexes`](service::GradeStore::ensure_indexes) and
/// [`GradeStore::install_schema`](service::GradeStore::install_schema)).
pub struct GradeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl GradeDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the base
    /// table cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let grade_db = Self {
            db,
            conn,
            remote: false,
        };
        grade_db.run_migrations().await?;
        tracing::debug!(path, "opened local grade database");
        Ok(grade_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StorageUnavailable` if the remote cannot be
    /// reached, or another `DatabaseError` if the base table cannot be created.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let grade_db = Self {
            db,
            conn,
            remote: true,
        };
        grade_db.run_migrations().await?;
        tracing::debug!(url, "opened remote grade database");
        Ok(grade_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Returns whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a grade id via libSQL. Returns e.g., `"grd-a3f8b2c10d9e4f71"`.
    ///
    /// Uses `randomblob(8)` in SQL to produce 16 hex characters, then prepends
    /// the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self) -> Result<GradeId, DatabaseError> {
        let bytes = GRADE_ID_HEX_LEN / 2;
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{PREFIX_GRADE}-' || lower(hex(randomblob({bytes})))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(GradeId::parse(&row.get::<String>(0)?)?)
    }
}

// Production tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> GradeDb {
        GradeDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_grades_table() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["grades"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn open_local_does_not_install_admin_objects() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT count(*) FROM sqlite_master WHERE type IN ('index', 'trigger') AND name LIKE 'grades_%'",
                (),
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id().await.unwrap();
        assert!(id.as_str().starts_with("grd-"), "unexpected id: {id}");
        assert_eq!(id.as_str().len(), 20, "3 prefix + 1 dash + 16 hex: {id}");
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id().await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn file_database_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.db");
        let path = path.to_str().unwrap();

        {
            let db = GradeDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO grades (id, learner_id, class_id, scores) VALUES ('grd-0000000000000001', 1, 2, '[]')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = GradeDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT count(*) FROM grades", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}

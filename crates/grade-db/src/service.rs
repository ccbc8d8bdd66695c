//! Service layer owning the storage handle.
//!
//! `GradeStore` wraps `GradeDb` (raw database access) and `SchemaRegistry`
//! (payload validation). All repository and aggregation methods are
//! implemented as `impl GradeStore` blocks under [`crate::repos`].
//!
//! A store is constructed explicitly at startup and closed at shutdown; there
//! is no process-wide handle. Every method is an independent request against
//! the engine and holds no in-process state between calls.

use grade_config::DatabaseConfig;
use grade_schema::SchemaRegistry;

use crate::GradeDb;
use crate::error::DatabaseError;

/// Grade store and aggregation engine over one libSQL connection.
pub struct GradeStore {
    db: GradeDb,
    schema: SchemaRegistry,
}

impl GradeStore {
    /// Open the database described by `config`: remote when both `url` and
    /// `auth_token` are set, otherwise the local file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for an invalid config,
    /// `DatabaseError::StorageUnavailable` if the engine cannot be reached,
    /// or another `DatabaseError` if the base table cannot be created.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidArgument(e.to_string()))?;

        let db = if config.is_remote() {
            GradeDb::open_remote(&config.url, &config.auth_token).await?
        } else {
            GradeDb::open_local(&config.path).await?
        };
        Ok(Self::from_db(db))
    }

    /// Open a local database at `path`, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(GradeDb::open_local(path).await?))
    }

    /// Create from an existing `GradeDb`.
    #[must_use]
    pub fn from_db(db: GradeDb) -> Self {
        Self {
            db,
            schema: SchemaRegistry::new(),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GradeDb {
        &self.db
    }

    /// Access the schema registry.
    #[must_use]
    pub const fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// Returns whether this store is backed by a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.db.is_remote()
    }

    /// Release the connection. Consumes the store so no request can follow.
    pub fn close(self) {
        let remote = self.db.is_remote();
        drop(self);
        tracing::info!(remote, "grade store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_uses_local_path_by_default() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        let store = GradeStore::open(&config).await.unwrap();
        assert!(!store.is_remote());
        assert_eq!(store.schema().schema_count(), 10);
        store.close();
    }

    #[tokio::test]
    async fn open_rejects_url_without_token() {
        let config = DatabaseConfig {
            url: "libsql://grades.turso.io".into(),
            ..Default::default()
        };
        let result = GradeStore::open(&config).await;
        assert!(matches!(result, Err(DatabaseError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn open_fails_for_unreachable_local_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("grades.db");
        let result = GradeStore::open_local(path.to_str().unwrap()).await;
        assert!(
            matches!(result, Err(DatabaseError::StorageUnavailable(_))),
            "missing directory should be an outage"
        );
    }

    #[tokio::test]
    async fn open_reports_refused_remote_as_unavailable() {
        let config = DatabaseConfig {
            url: "http://127.0.0.1:9".into(),
            auth_token: "test-token".into(),
            ..Default::default()
        };
        let result = GradeStore::open(&config).await;
        assert!(
            matches!(result, Err(DatabaseError::StorageUnavailable(_))),
            "refused connection should be an outage"
        );
    }
}

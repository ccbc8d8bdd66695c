//! Database error types for grade-db.
//!
//! `libsql::Error` is classified on conversion so callers see the store's
//! taxonomy (`NotFound`, `StorageUnavailable`, `ValidationFailed`,
//! `InvalidArgument`) instead of raw engine codes. Nothing is retried.

use grade_core::errors::CoreError;
use grade_schema::SchemaError;
use thiserror::Error;

const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_IOERR: i32 = 10;
const SQLITE_CANTOPEN: i32 = 14;
const SQLITE_PROTOCOL: i32 = 15;
const SQLITE_CONSTRAINT: i32 = 19;

/// Message prefix raised by the installed validator triggers.
pub const VALIDATION_MESSAGE_PREFIX: &str = "grade validation failed";

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A single-record operation addressed no existing grade.
    #[error("Grade not found: {0}")]
    NotFound(String),

    /// The storage engine could not be reached or timed out.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A write violates the installed schema contract, or a payload failed
    /// validation before reaching storage.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A caller-supplied identifier or filter value is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error that fits no other category.
    #[error("libSQL error: {0}")]
    LibSql(#[source] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<libsql::Error> for DatabaseError {
    fn from(error: libsql::Error) -> Self {
        match &error {
            libsql::Error::SqliteFailure(code, message) => match *code & 0xff {
                SQLITE_CONSTRAINT => return Self::ValidationFailed(message.clone()),
                SQLITE_BUSY | SQLITE_LOCKED | SQLITE_IOERR | SQLITE_CANTOPEN
                | SQLITE_PROTOCOL => return Self::StorageUnavailable(message.clone()),
                _ => {}
            },
            libsql::Error::ConnectionFailed(message) => {
                return Self::StorageUnavailable(message.clone());
            }
            _ => {}
        }

        let message = error.to_string();
        if message.contains(VALIDATION_MESSAGE_PREFIX) || message.contains("constraint failed") {
            Self::ValidationFailed(message)
        } else if is_unavailable_message(&message) {
            Self::StorageUnavailable(message)
        } else {
            Self::LibSql(error)
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::ValidationFailed(message),
            CoreError::InvalidArgument { field, reason } => {
                Self::InvalidArgument(format!("{field}: {reason}"))
            }
        }
    }
}

impl From<SchemaError> for DatabaseError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::ValidationFailed { errors } => Self::ValidationFailed(errors.join("; ")),
            other => Self::Other(other.into()),
        }
    }
}

/// Detect transport-level failures reported by remote (Hrana) connections.
///
/// Remote errors arrive as opaque messages rather than SQLite codes. The
/// predicate is intentionally narrow so SQL errors are never reported as an
/// outage.
fn is_unavailable_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    [
        "connection refused",
        "connection reset",
        "failed to connect",
        "error trying to connect",
        "timed out",
        "broken pipe",
        "dns error",
    ]
    .iter()
    .any(|needle| lower.contains(needle))
}

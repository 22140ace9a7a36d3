//! Database error types for sight-db.

use sight_core::errors::CoreError;
use thiserror::Error;

/// Errors from primary store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A lifecycle hook rejected the operation after the row was written.
    #[error("Lifecycle hook failed: {0}")]
    Hook(#[source] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for CoreError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::Hook(inner) => inner,
            other => Self::Unavailable {
                store: "primary store",
                message: other.to_string(),
            },
        }
    }
}

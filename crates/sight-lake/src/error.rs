//! Lake error types.

use sight_core::errors::CoreError;

/// Errors that can occur in the spatial index storage layer.
#[derive(Debug, thiserror::Error)]
pub enum LakeError {
    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A previous holder of the connection panicked.
    #[error("Connection lock poisoned")]
    LockPoisoned,

    /// The blocking worker running the query was cancelled or panicked.
    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// I/O error (file operations on `DuckDB` files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LakeError> for CoreError {
    fn from(e: LakeError) -> Self {
        Self::Unavailable {
            store: "spatial index",
            message: e.to_string(),
        }
    }
}

//! Search error types for sight-search.

use sight_core::errors::CoreError;

/// Errors from a federated search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query point is missing or not a valid coordinate.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The spatial ranking could not be run.
    #[error("spatial ranking failed: {0}")]
    Ranking(#[source] CoreError),
}

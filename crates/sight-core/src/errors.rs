//! Cross-cutting error types for the sightings service.
//!
//! Capability traits (`SpatialIndex`, `PrimaryStore`, `RecordHooks`) return
//! `CoreError` so that callers can apply their propagation policy without
//! knowing which driver sits behind the trait. Driver-specific errors
//! (`DatabaseError`, `LakeError`) live in their crates and convert into this.

use thiserror::Error;

/// Errors that can be raised across crate boundaries.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The backing store could not serve the call (connection, I/O, driver).
    #[error("{store} unavailable: {message}")]
    Unavailable {
        store: &'static str,
        message: String,
    },

    /// The call did not complete before its deadline.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a missing sighting.
    #[must_use]
    pub fn sighting_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "sighting".to_string(),
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

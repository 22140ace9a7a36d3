//! # sight-lake
//!
//! `DuckDB` spatial index for sightings.
//!
//! Holds one point per sighting, keyed by the primary store's identity, and
//! ranks points by great-circle distance to an origin. Every statement binds
//! its inputs; nothing is spliced into SQL text.
//!
//! The `DuckDB` API is synchronous. [`SpatialLake`] exposes blocking methods
//! and implements [`sight_core::capability::SpatialIndex`] by moving each call
//! onto tokio's blocking pool.

pub mod error;
mod index;
pub mod schemas;
pub mod store;

pub use error::LakeError;

use std::sync::{Arc, Mutex, MutexGuard};

use duckdb::Connection;

/// Local `DuckDB` spatial index.
///
/// Cheap to clone; clones share one connection.
#[derive(Clone)]
pub struct SpatialLake {
    conn: Arc<Mutex<Connection>>,
}

impl SpatialLake {
    /// Open or create a local `DuckDB` file.
    ///
    /// Creates the point table if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the file cannot be opened or schema creation fails.
    pub fn open_local(path: &str) -> Result<Self, LakeError> {
        let conn = Connection::open(path)?;
        let lake = Self::from_connection(conn)?;
        tracing::debug!(path, "spatial index opened");
        Ok(lake)
    }

    /// Open an in-memory index (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if schema creation fails.
    pub fn open_in_memory() -> Result<Self, LakeError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, LakeError> {
        conn.execute_batch(schemas::CREATE_SIGHTING_POINTS)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Lock the underlying `DuckDB` connection.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::LockPoisoned`] if a previous holder panicked.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, LakeError> {
        self.conn.lock().map_err(|_| LakeError::LockPoisoned)
    }
}

//! Narrow store contracts consumed by the synchronization layer and query
//! federation.
//!
//! Implementations are injected as `Arc<dyn ...>` handles at construction
//! time and must be safe for concurrent use.

use async_trait::async_trait;

use crate::entities::{RankedMatch, Sighting, SpatialPoint};
use crate::errors::CoreError;
use crate::geo::Coordinate;

/// Point storage keyed by foreign identity, plus nearest-neighbour ranking.
#[async_trait]
pub trait SpatialIndex: Send + Sync {
    /// Insert or replace the point stored under `point.sighting_id`.
    async fn upsert_point(&self, point: &SpatialPoint) -> Result<(), CoreError>;

    /// Fetch the point stored under `sighting_id`.
    ///
    /// Returns `CoreError::NotFound` if no point exists.
    async fn get_point(&self, sighting_id: &str) -> Result<SpatialPoint, CoreError>;

    /// Delete the point stored under `sighting_id`.
    ///
    /// Returns `Ok(false)` if there was nothing to delete.
    async fn delete_point(&self, sighting_id: &str) -> Result<bool, CoreError>;

    /// Rank all points by distance to `origin`, ascending, truncated to `limit`.
    async fn nearest(&self, origin: Coordinate, limit: u32)
    -> Result<Vec<RankedMatch>, CoreError>;

    /// Every key currently in the index.
    async fn list_ids(&self) -> Result<Vec<String>, CoreError>;
}

/// Read access to the primary record store.
#[async_trait]
pub trait PrimaryStore: Send + Sync {
    /// Read one record by identity. `Ok(None)` if it does not exist.
    async fn find_sighting(&self, id: &str) -> Result<Option<Sighting>, CoreError>;

    /// Every identity currently in the store.
    async fn list_ids(&self) -> Result<Vec<String>, CoreError>;
}

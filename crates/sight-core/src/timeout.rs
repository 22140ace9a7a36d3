//! Deadline wrappers for store capabilities.
//!
//! Every remote call is bounded. A call that misses its deadline fails with
//! `CoreError::Timeout`, which callers treat exactly like any other transport
//! error. There is no retry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::capability::{PrimaryStore, SpatialIndex};
use crate::entities::{RankedMatch, Sighting, SpatialPoint};
use crate::errors::CoreError;
use crate::geo::Coordinate;

/// Await `fut`, failing with `CoreError::Timeout` if it takes longer than `limit`.
///
/// # Errors
///
/// Returns the future's own error, or `CoreError::Timeout` on expiry.
pub async fn within<T, F>(operation: &'static str, limit: Duration, fut: F) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, CoreError>> + Send,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::Timeout {
            operation,
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// `SpatialIndex` decorator applying a per-call deadline.
pub struct TimedSpatialIndex {
    inner: Arc<dyn SpatialIndex>,
    limit: Duration,
}

impl TimedSpatialIndex {
    #[must_use]
    pub fn new(inner: Arc<dyn SpatialIndex>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl SpatialIndex for TimedSpatialIndex {
    async fn upsert_point(&self, point: &SpatialPoint) -> Result<(), CoreError> {
        within("spatial upsert", self.limit, self.inner.upsert_point(point)).await
    }

    async fn get_point(&self, sighting_id: &str) -> Result<SpatialPoint, CoreError> {
        within("spatial fetch", self.limit, self.inner.get_point(sighting_id)).await
    }

    async fn delete_point(&self, sighting_id: &str) -> Result<bool, CoreError> {
        within("spatial delete", self.limit, self.inner.delete_point(sighting_id)).await
    }

    async fn nearest(
        &self,
        origin: Coordinate,
        limit: u32,
    ) -> Result<Vec<RankedMatch>, CoreError> {
        within("spatial ranking", self.limit, self.inner.nearest(origin, limit)).await
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        within("spatial key scan", self.limit, self.inner.list_ids()).await
    }
}

/// `PrimaryStore` decorator applying a per-call deadline.
pub struct TimedPrimaryStore {
    inner: Arc<dyn PrimaryStore>,
    limit: Duration,
}

impl TimedPrimaryStore {
    #[must_use]
    pub fn new(inner: Arc<dyn PrimaryStore>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl PrimaryStore for TimedPrimaryStore {
    async fn find_sighting(&self, id: &str) -> Result<Option<Sighting>, CoreError> {
        within("primary lookup", self.limit, self.inner.find_sighting(id)).await
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        within("primary key scan", self.limit, self.inner.list_ids()).await
    }
}

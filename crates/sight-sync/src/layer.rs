use std::sync::Arc;

use async_trait::async_trait;
use sight_core::capability::SpatialIndex;
use sight_core::entities::{Sighting, SpatialPoint};
use sight_core::errors::CoreError;
use sight_core::geo::Coordinate;
use sight_core::hooks::{PendingLocation, RecordHooks};
use sight_core::responses::SightingRecord;

use crate::payload::{Rejected, parse_coordinate};

/// Lifecycle subscriber that mirrors sighting locations into a spatial index.
pub struct SyncLayer {
    spatial: Arc<dyn SpatialIndex>,
}

impl SyncLayer {
    #[must_use]
    pub fn new(spatial: Arc<dyn SpatialIndex>) -> Self {
        Self { spatial }
    }
}

#[async_trait]
impl RecordHooks for SyncLayer {
    fn on_create_request(&self, body: &[u8]) -> PendingLocation {
        let coordinate = match parse_coordinate(body) {
            Ok(coordinate) => coordinate,
            Err(Rejected::Unreadable(reason)) => {
                tracing::warn!(%reason, "create body has no readable coordinate; staging zero");
                Coordinate::ZERO
            }
            Err(Rejected::OutOfRange) => {
                tracing::warn!("create body coordinate out of range; staging zero");
                Coordinate::ZERO
            }
        };
        PendingLocation::new(coordinate)
    }

    async fn on_create_committed(
        &self,
        record: &Sighting,
        pending: PendingLocation,
    ) -> Result<(), CoreError> {
        let point = SpatialPoint::new(record.id.as_str(), pending.coordinate());
        match self.spatial.upsert_point(&point).await {
            Ok(()) => {
                tracing::debug!(sighting_id = %record.id, "spatial point written");
                Ok(())
            }
            Err(error) => {
                tracing::error!(
                    sighting_id = %record.id,
                    %error,
                    "spatial point write failed; record committed without point"
                );
                Err(error)
            }
        }
    }

    async fn on_enrich(&self, record: Sighting) -> SightingRecord {
        let location = match self.spatial.get_point(&record.id).await {
            Ok(point) => point.location,
            Err(error) if error.is_not_found() => {
                tracing::debug!(sighting_id = %record.id, "no spatial point; using zero");
                Coordinate::ZERO
            }
            Err(error) => {
                tracing::warn!(sighting_id = %record.id, %error, "spatial fetch failed; using zero");
                Coordinate::ZERO
            }
        };
        SightingRecord::enriched(record, location)
    }

    async fn on_after_delete(&self, record: &Sighting) -> Result<(), CoreError> {
        match self.spatial.delete_point(&record.id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::debug!(sighting_id = %record.id, "no spatial point to delete");
                Ok(())
            }
            Err(error) if error.is_not_found() => Ok(()),
            Err(error) => {
                tracing::error!(sighting_id = %record.id, %error, "spatial point delete failed");
                Err(error)
            }
        }
    }
}

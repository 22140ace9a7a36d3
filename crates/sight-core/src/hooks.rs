//! Lifecycle events raised by the primary store.
//!
//! The primary store calls these at fixed points of its own CRUD paths:
//!
//! | Event | When | Failure policy |
//! |---|---|---|
//! | `on_create_request` | before the insert, no identity yet | cannot fail |
//! | `on_create_committed` | after the insert, identity assigned | fails the request |
//! | `on_enrich` | before any record is returned | cannot fail |
//! | `on_after_delete` | after the row is gone | fails the request |

use async_trait::async_trait;

use crate::entities::Sighting;
use crate::errors::CoreError;
use crate::geo::Coordinate;
use crate::responses::SightingRecord;

/// Coordinates submitted with a create request, carried from the request
/// stage to the commit stage.
///
/// The primary store does not model location, so this travels alongside the
/// in-flight record instead of inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingLocation(Coordinate);

impl PendingLocation {
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self(coordinate)
    }

    #[must_use]
    pub const fn coordinate(self) -> Coordinate {
        self.0
    }
}

/// Subscriber to primary-store lifecycle events for the sightings collection.
#[async_trait]
pub trait RecordHooks: Send + Sync {
    /// Extract the location staged with a create request from its raw body.
    fn on_create_request(&self, body: &[u8]) -> PendingLocation;

    /// The record has been inserted and carries its identity.
    async fn on_create_committed(
        &self,
        record: &Sighting,
        pending: PendingLocation,
    ) -> Result<(), CoreError>;

    /// Produce the outgoing representation of `record`.
    async fn on_enrich(&self, record: Sighting) -> SightingRecord;

    /// The record has been deleted from the primary store.
    async fn on_after_delete(&self, record: &Sighting) -> Result<(), CoreError>;
}

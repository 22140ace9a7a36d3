//! Shared test utilities for sight-db unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sight_core::entities::Sighting;
use sight_core::errors::CoreError;
use sight_core::geo::Coordinate;
use sight_core::hooks::{PendingLocation, RecordHooks};
use sight_core::responses::SightingRecord;

use crate::service::SightingService;

/// Records every lifecycle event it receives. Optionally fails the
/// post-commit and post-delete events.
#[derive(Default)]
pub struct RecordingHooks {
    pub events: Mutex<Vec<String>>,
    pub fail_writes: bool,
}

impl RecordingHooks {
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl RecordHooks for RecordingHooks {
    fn on_create_request(&self, body: &[u8]) -> PendingLocation {
        self.push(format!("request:{}", body.len()));
        PendingLocation::new(Coordinate::new(1.5, 2.5))
    }

    async fn on_create_committed(
        &self,
        record: &Sighting,
        pending: PendingLocation,
    ) -> Result<(), CoreError> {
        let c = pending.coordinate();
        self.push(format!("committed:{}:{}:{}", record.id, c.latitude, c.longitude));
        if self.fail_writes {
            return Err(CoreError::Unavailable {
                store: "spatial index",
                message: "refused".into(),
            });
        }
        Ok(())
    }

    async fn on_enrich(&self, record: Sighting) -> SightingRecord {
        self.push(format!("enrich:{}", record.id));
        SightingRecord::enriched(record, Coordinate::new(1.5, 2.5))
    }

    async fn on_after_delete(&self, record: &Sighting) -> Result<(), CoreError> {
        self.push(format!("deleted:{}", record.id));
        if self.fail_writes {
            return Err(CoreError::Timeout {
                operation: "spatial delete",
                timeout_ms: 10,
            });
        }
        Ok(())
    }
}

/// In-memory service wired to the given hooks.
pub async fn test_service(hooks: Arc<RecordingHooks>) -> SightingService {
    SightingService::new_local(":memory:", hooks).await.unwrap()
}

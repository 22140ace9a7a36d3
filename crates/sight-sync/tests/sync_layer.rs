//! Lifecycle behaviour of `SyncLayer` against test-double and real stores.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use pretty_assertions::assert_eq;
use sight_core::capability::SpatialIndex;
use sight_core::entities::{NewSighting, RankedMatch, Sighting, SpatialPoint};
use sight_core::errors::CoreError;
use sight_core::geo::Coordinate;
use sight_core::hooks::{PendingLocation, RecordHooks};
use sight_db::error::DatabaseError;
use sight_db::service::SightingService;
use sight_lake::SpatialLake;
use sight_sync::{SyncLayer, consistency_report};

/// In-memory index that can be switched into a failing mode.
#[derive(Default)]
struct MemoryIndex {
    points: Mutex<BTreeMap<String, Coordinate>>,
    broken: Mutex<bool>,
}

impl MemoryIndex {
    fn break_now(&self) {
        *self.broken.lock().unwrap() = true;
    }

    fn check(&self) -> Result<(), CoreError> {
        if *self.broken.lock().unwrap() {
            return Err(CoreError::Unavailable {
                store: "spatial index",
                message: "connection refused".into(),
            });
        }
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Coordinate> {
        self.points.lock().unwrap().get(id).copied()
    }
}

#[async_trait]
impl SpatialIndex for MemoryIndex {
    async fn upsert_point(&self, point: &SpatialPoint) -> Result<(), CoreError> {
        self.check()?;
        self.points
            .lock()
            .unwrap()
            .insert(point.sighting_id.clone(), point.location);
        Ok(())
    }

    async fn get_point(&self, sighting_id: &str) -> Result<SpatialPoint, CoreError> {
        self.check()?;
        self.get(sighting_id)
            .map(|location| SpatialPoint::new(sighting_id, location))
            .ok_or_else(|| CoreError::sighting_not_found(sighting_id))
    }

    async fn delete_point(&self, sighting_id: &str) -> Result<bool, CoreError> {
        self.check()?;
        Ok(self.points.lock().unwrap().remove(sighting_id).is_some())
    }

    async fn nearest(
        &self,
        _origin: Coordinate,
        _limit: u32,
    ) -> Result<Vec<RankedMatch>, CoreError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        self.check()?;
        Ok(self.points.lock().unwrap().keys().cloned().collect())
    }
}

fn sighting(id: &str) -> Sighting {
    Sighting {
        id: id.into(),
        description: "Pronghorn".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn committed_writes_staged_point() {
    let index = Arc::new(MemoryIndex::default());
    let layer = SyncLayer::new(index.clone());

    let pending = layer.on_create_request(br#"{"latitude":44.4,"longitude":-110.6}"#);
    layer
        .on_create_committed(&sighting("sgt-00000001"), pending)
        .await
        .unwrap();

    assert_eq!(index.get("sgt-00000001"), Some(Coordinate::new(44.4, -110.6)));
}

#[tokio::test]
async fn malformed_body_stages_zero() {
    let layer = SyncLayer::new(Arc::new(MemoryIndex::default()));
    assert_eq!(
        layer.on_create_request(b"{not json"),
        PendingLocation::new(Coordinate::ZERO)
    );
}

#[tokio::test]
async fn committed_failure_is_returned() {
    let index = Arc::new(MemoryIndex::default());
    index.break_now();
    let layer = SyncLayer::new(index);

    let err = layer
        .on_create_committed(&sighting("sgt-00000001"), PendingLocation::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Unavailable { .. }));
}

#[tokio::test]
async fn enrich_degrades_to_zero() {
    let index = Arc::new(MemoryIndex::default());
    let layer = SyncLayer::new(index.clone());

    let missing = layer.on_enrich(sighting("sgt-00000001")).await;
    assert_eq!(missing.location(), Coordinate::ZERO);

    index
        .upsert_point(&SpatialPoint::new("sgt-00000002", Coordinate::new(3.0, 4.0)))
        .await
        .unwrap();
    let found = layer.on_enrich(sighting("sgt-00000002")).await;
    assert_eq!(found.location(), Coordinate::new(3.0, 4.0));

    index.break_now();
    let broken = layer.on_enrich(sighting("sgt-00000002")).await;
    assert_eq!(broken.location(), Coordinate::ZERO);
    assert_eq!(broken.description, "Pronghorn");
}

#[tokio::test]
async fn delete_is_idempotent_but_transport_failure_is_fatal() {
    let index = Arc::new(MemoryIndex::default());
    let layer = SyncLayer::new(index.clone());

    layer.on_after_delete(&sighting("sgt-00000001")).await.unwrap();

    index.break_now();
    assert!(layer.on_after_delete(&sighting("sgt-00000001")).await.is_err());
}

async fn wired() -> (SightingService, SpatialLake) {
    let lake = SpatialLake::open_in_memory().unwrap();
    let layer = Arc::new(SyncLayer::new(Arc::new(lake.clone())));
    let svc = SightingService::new_local(":memory:", layer).await.unwrap();
    (svc, lake)
}

fn new_sighting(description: &str) -> NewSighting {
    NewSighting {
        description: description.into(),
    }
}

#[tokio::test]
async fn create_then_read_returns_submitted_coordinate() {
    let (svc, _lake) = wired().await;
    let created = svc
        .create_sighting(
            &new_sighting("Bison"),
            br#"{"description":"Bison","latitude":44.6,"longitude":-110.5}"#,
        )
        .await
        .unwrap();
    assert_eq!(created.location(), Coordinate::new(44.6, -110.5));

    let read = svc.get_sighting(&created.id).await.unwrap();
    assert_eq!(read.location(), Coordinate::new(44.6, -110.5));
}

#[tokio::test]
async fn delete_removes_point() {
    let (svc, lake) = wired().await;
    let created = svc
        .create_sighting(&new_sighting("Elk"), br#"{"latitude":1,"longitude":1}"#)
        .await
        .unwrap();
    assert!(lake.point(&created.id).unwrap().is_some());

    svc.delete_sighting(&created.id).await.unwrap();
    assert!(lake.point(&created.id).unwrap().is_none());
}

#[tokio::test]
async fn failed_point_write_fails_create_and_is_reported() {
    let index = Arc::new(MemoryIndex::default());
    let svc = SightingService::new_local(":memory:", Arc::new(SyncLayer::new(index.clone())))
        .await
        .unwrap();

    index.break_now();
    let err = svc
        .create_sighting(&new_sighting("Wolf"), br#"{"latitude":1,"longitude":1}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Hook(_)));

    *index.broken.lock().unwrap() = false;
    let report = consistency_report(&svc, index.as_ref()).await.unwrap();
    assert_eq!(report.missing_points.len(), 1);
    assert!(report.orphan_points.is_empty());
}

#[tokio::test]
async fn report_lists_orphans() {
    let (svc, lake) = wired().await;
    let kept = svc
        .create_sighting(&new_sighting("Lynx"), br#"{"latitude":2,"longitude":2}"#)
        .await
        .unwrap();
    lake.upsert(&SpatialPoint::new("sgt-deadbeef", Coordinate::new(5.0, 5.0)))
        .unwrap();

    let report = consistency_report(&svc, &lake).await.unwrap();
    assert_eq!(report.orphan_points, vec!["sgt-deadbeef".to_string()]);
    assert!(report.missing_points.is_empty());
    assert!(lake.point(&kept.id).unwrap().is_some());
}

#[tokio::test]
async fn report_surfaces_scan_failure() {
    let (svc, _lake) = wired().await;
    let index = MemoryIndex::default();
    index.break_now();
    assert!(matches!(
        consistency_report(&svc, &index).await,
        Err(sight_sync::SyncError::Spatial(_))
    ));
}

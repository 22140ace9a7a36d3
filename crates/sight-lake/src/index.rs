//! [`SpatialIndex`] over [`SpatialLake`] via tokio's blocking pool.

use async_trait::async_trait;
use sight_core::capability::SpatialIndex;
use sight_core::entities::{RankedMatch, SpatialPoint};
use sight_core::errors::CoreError;
use sight_core::geo::Coordinate;

use crate::{LakeError, SpatialLake};

impl SpatialLake {
    async fn blocking<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Self) -> Result<T, LakeError> + Send + 'static,
    {
        let lake = self.clone();
        let result = tokio::task::spawn_blocking(move || f(&lake))
            .await
            .map_err(LakeError::from)?;
        Ok(result?)
    }
}

#[async_trait]
impl SpatialIndex for SpatialLake {
    async fn upsert_point(&self, point: &SpatialPoint) -> Result<(), CoreError> {
        let point = point.clone();
        self.blocking(move |lake| lake.upsert(&point)).await
    }

    async fn get_point(&self, sighting_id: &str) -> Result<SpatialPoint, CoreError> {
        let id = sighting_id.to_string();
        self.blocking(move |lake| lake.point(&id))
            .await?
            .ok_or_else(|| CoreError::sighting_not_found(sighting_id))
    }

    async fn delete_point(&self, sighting_id: &str) -> Result<bool, CoreError> {
        let id = sighting_id.to_string();
        self.blocking(move |lake| lake.remove(&id)).await
    }

    async fn nearest(
        &self,
        origin: Coordinate,
        limit: u32,
    ) -> Result<Vec<RankedMatch>, CoreError> {
        self.blocking(move |lake| lake.rank(origin, limit)).await
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        self.blocking(Self::point_ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_point_is_not_found() {
        let lake = SpatialLake::open_in_memory().unwrap();
        let index: &dyn SpatialIndex = &lake;
        let err = index.get_point("sgt-ffffffff").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn trait_roundtrip() {
        let lake = SpatialLake::open_in_memory().unwrap();
        let index: &dyn SpatialIndex = &lake;
        let point = SpatialPoint::new("sgt-00000001", Coordinate::new(10.0, 20.0));

        index.upsert_point(&point).await.unwrap();
        assert_eq!(index.get_point("sgt-00000001").await.unwrap(), point);
        assert_eq!(index.list_ids().await.unwrap(), vec!["sgt-00000001".to_string()]);

        let ranked = index.nearest(Coordinate::new(10.0, 20.0), 5).await.unwrap();
        assert_eq!(ranked.len(), 1);

        assert!(index.delete_point("sgt-00000001").await.unwrap());
        assert!(!index.delete_point("sgt-00000001").await.unwrap());
    }
}

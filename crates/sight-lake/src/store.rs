//! Blocking point operations on [`SpatialLake`].

use duckdb::{OptionalExt, params};
use sight_core::entities::{RankedMatch, SpatialPoint};
use sight_core::geo::{Coordinate, EARTH_RADIUS_M};

use crate::schemas::{RANK_BY_DISTANCE, row_to_match, row_to_point};
use crate::{LakeError, SpatialLake};

impl SpatialLake {
    /// Insert or replace the point stored under `point.sighting_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError`] if the write fails.
    pub fn upsert(&self, point: &SpatialPoint) -> Result<(), LakeError> {
        self.conn()?.execute(
            "INSERT OR REPLACE INTO sighting_points (sighting_id, latitude, longitude) \
             VALUES (?, ?, ?)",
            params![
                point.sighting_id,
                point.location.latitude,
                point.location.longitude
            ],
        )?;
        Ok(())
    }

    /// Fetch the point stored under `sighting_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError`] if the query fails.
    pub fn point(&self, sighting_id: &str) -> Result<Option<SpatialPoint>, LakeError> {
        let point = self
            .conn()?
            .query_row(
                "SELECT sighting_id, latitude, longitude FROM sighting_points \
                 WHERE sighting_id = ?",
                [sighting_id],
                row_to_point,
            )
            .optional()?;
        Ok(point)
    }

    /// Delete the point stored under `sighting_id`. Returns whether a row
    /// was removed.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError`] if the delete fails.
    pub fn remove(&self, sighting_id: &str) -> Result<bool, LakeError> {
        let removed = self.conn()?.execute(
            "DELETE FROM sighting_points WHERE sighting_id = ?",
            [sighting_id],
        )?;
        Ok(removed > 0)
    }

    /// The `limit` points nearest to `origin`, ascending by distance in metres.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError`] if the query fails.
    pub fn rank(&self, origin: Coordinate, limit: u32) -> Result<Vec<RankedMatch>, LakeError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(RANK_BY_DISTANCE)?;
        let matches = stmt
            .query_map(
                params![
                    EARTH_RADIUS_M,
                    origin.latitude,
                    origin.latitude,
                    origin.longitude,
                    i64::from(limit)
                ],
                row_to_match,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(matches)
    }

    /// Every key in the index, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError`] if the query fails.
    pub fn point_ids(&self) -> Result<Vec<String>, LakeError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT sighting_id FROM sighting_points ORDER BY sighting_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lake_with(points: &[(&str, f64, f64)]) -> SpatialLake {
        let lake = SpatialLake::open_in_memory().unwrap();
        for (id, lat, lon) in points {
            lake.upsert(&SpatialPoint::new(*id, Coordinate::new(*lat, *lon)))
                .unwrap();
        }
        lake
    }

    #[test]
    fn upsert_replaces_existing_point() {
        let lake = lake_with(&[("sgt-00000001", 1.0, 1.0)]);
        lake.upsert(&SpatialPoint::new("sgt-00000001", Coordinate::new(5.0, 6.0)))
            .unwrap();

        let point = lake.point("sgt-00000001").unwrap().unwrap();
        assert_eq!(point.location, Coordinate::new(5.0, 6.0));
        assert_eq!(lake.point_ids().unwrap(), vec!["sgt-00000001".to_string()]);
    }

    #[test]
    fn missing_point_is_none() {
        let lake = lake_with(&[]);
        assert!(lake.point("sgt-ffffffff").unwrap().is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let lake = lake_with(&[("sgt-00000001", 1.0, 1.0)]);
        assert!(lake.remove("sgt-00000001").unwrap());
        assert!(!lake.remove("sgt-00000001").unwrap());
        assert!(lake.point_ids().unwrap().is_empty());
    }

    #[test]
    fn rank_orders_by_distance() {
        let lake = lake_with(&[
            ("one", 0.0, 0.01),
            ("five", 0.0, 0.05),
            ("two", 0.0, 0.02),
        ]);
        let ranked = lake.rank(Coordinate::ZERO, 5).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|m| m.sighting_id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two", "five"]);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn rank_distance_matches_haversine() {
        let paris = Coordinate::new(48.8566, 2.3522);
        let london = Coordinate::new(51.5074, -0.1278);
        let lake = lake_with(&[("paris", paris.latitude, paris.longitude)]);

        let ranked = lake.rank(london, 1).unwrap();
        let expected = london.haversine_distance(&paris);
        assert!(
            (ranked[0].distance - expected).abs() < 1.0,
            "sql {} vs rust {expected}",
            ranked[0].distance
        );
    }

    #[test]
    fn rank_at_own_point_is_zero() {
        let lake = lake_with(&[("here", 38.5, -106.0)]);
        let ranked = lake.rank(Coordinate::new(38.5, -106.0), 5).unwrap();
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].distance.abs() < 1e-6);
    }

    #[test]
    fn rank_survives_antipodal_origin() {
        let lake = lake_with(&[("north", 90.0, 0.0)]);
        let ranked = lake.rank(Coordinate::new(-90.0, 0.0), 1).unwrap();
        assert!(ranked[0].distance.is_finite());
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(20, 10)]
    fn rank_truncates(#[case] limit: u32, #[case] expected: usize) {
        let points: Vec<(String, f64, f64)> = (1..=10)
            .map(|i| (format!("p{i:02}"), 0.0, f64::from(i) * 0.01))
            .collect();
        let lake = SpatialLake::open_in_memory().unwrap();
        for (id, lat, lon) in &points {
            lake.upsert(&SpatialPoint::new(id.as_str(), Coordinate::new(*lat, *lon)))
                .unwrap();
        }

        let ranked = lake.rank(Coordinate::ZERO, limit).unwrap();
        assert_eq!(ranked.len(), expected);
        assert_eq!(ranked[0].sighting_id, "p01");
    }

    #[test]
    fn keys_are_bound_not_spliced() {
        let lake = lake_with(&[("x' OR '1'='1", 0.0, 0.0), ("sgt-00000001", 0.0, 0.0)]);
        assert!(lake.remove("x' OR '1'='1").unwrap());
        assert_eq!(lake.point_ids().unwrap(), vec!["sgt-00000001".to_string()]);
    }
}

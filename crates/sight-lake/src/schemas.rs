//! `DuckDB` table DDL and row mapping for the spatial index.

use sight_core::entities::{RankedMatch, SpatialPoint};
use sight_core::geo::Coordinate;

/// One point per sighting, keyed by the primary store's identity.
pub const CREATE_SIGHTING_POINTS: &str = "
CREATE TABLE IF NOT EXISTS sighting_points (
    sighting_id VARCHAR PRIMARY KEY,
    latitude DOUBLE NOT NULL,
    longitude DOUBLE NOT NULL
);
";

/// Great-circle ranking over every stored point.
///
/// Bound parameters, in order: earth radius (metres), origin latitude,
/// origin latitude again (for the cosine term), origin longitude, row limit.
/// The `least` clamp keeps `asin` in domain when rounding pushes the
/// haversine term a hair above 1 for antipodal points.
pub const RANK_BY_DISTANCE: &str = "
SELECT sighting_id, latitude, longitude,
       2 * CAST(? AS DOUBLE) * asin(least(1.0, sqrt(
           pow(sin(radians(latitude - CAST(? AS DOUBLE)) / 2), 2)
           + cos(radians(CAST(? AS DOUBLE))) * cos(radians(latitude))
             * pow(sin(radians(longitude - CAST(? AS DOUBLE)) / 2), 2)
       ))) AS distance
FROM sighting_points
ORDER BY distance
LIMIT ?
";

pub(crate) fn row_to_point(row: &duckdb::Row<'_>) -> duckdb::Result<SpatialPoint> {
    Ok(SpatialPoint {
        sighting_id: row.get(0)?,
        location: Coordinate::new(row.get(1)?, row.get(2)?),
    })
}

pub(crate) fn row_to_match(row: &duckdb::Row<'_>) -> duckdb::Result<RankedMatch> {
    Ok(RankedMatch {
        sighting_id: row.get(0)?,
        location: Coordinate::new(row.get(1)?, row.get(2)?),
        distance: row.get(3)?,
    })
}

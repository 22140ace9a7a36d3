//! Response types returned as JSON by the `sightd` HTTP surface and CLI.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{RankedMatch, Sighting};
use crate::geo::Coordinate;

/// A primary record on its way out, with the coordinate backfilled from the
/// spatial index.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SightingRecord {
    pub id: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl SightingRecord {
    #[must_use]
    pub fn enriched(sighting: Sighting, location: Coordinate) -> Self {
        Self {
            id: sighting.id,
            description: sighting.description,
            created: sighting.created_at,
            updated: sighting.updated_at,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    #[must_use]
    pub const fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// One entry of `GET /search`: a ranked spatial match joined with its
/// primary record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MergedResult {
    pub id: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}

impl MergedResult {
    /// Join a ranked match with the record it points at.
    ///
    /// Identity is taken from the primary record; location and distance from
    /// the match.
    #[must_use]
    pub fn join(sighting: Sighting, matched: &RankedMatch) -> Self {
        Self {
            id: sighting.id,
            description: sighting.description,
            latitude: matched.location.latitude,
            longitude: matched.location.longitude,
            distance: matched.distance,
        }
    }
}

/// Output of `sightd check`: keys present in only one of the two stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Spatial points whose primary record no longer exists.
    pub orphan_points: Vec<String>,
    /// Primary records that never received a spatial point.
    pub missing_points: Vec<String>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.orphan_points.is_empty() && self.missing_points.is_empty()
    }
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

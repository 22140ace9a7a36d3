use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A coordinate in the spatial index, keyed by the primary store's identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SpatialPoint {
    pub sighting_id: String,
    pub location: Coordinate,
}

impl SpatialPoint {
    #[must_use]
    pub fn new(sighting_id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            sighting_id: sighting_id.into(),
            location,
        }
    }
}

/// A spatial point ranked against a query origin.
///
/// `distance` is in metres. Produced only by nearest-neighbour queries and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankedMatch {
    pub sighting_id: String,
    pub location: Coordinate,
    pub distance: f64,
}

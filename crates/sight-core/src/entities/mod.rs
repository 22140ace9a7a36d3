//! Entity structs for both stores.
//!
//! `Sighting` maps to the `sightings` table in the primary (libSQL) store.
//! `SpatialPoint` and `RankedMatch` map to the `sighting_points` table in the
//! spatial (DuckDB) store. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod point;
mod sighting;

pub use point::{RankedMatch, SpatialPoint};
pub use sighting::{NewSighting, Sighting};

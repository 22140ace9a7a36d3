//! Repository modules implementing CRUD operations for the sightings collection.
//!
//! Each module adds methods to `SightingService` via `impl SightingService` blocks.

pub mod sighting;

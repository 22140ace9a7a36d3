use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sighting as persisted by the primary store.
///
/// Carries no coordinate: location lives in the spatial index and is attached
/// on the way out (see `responses::SightingRecord`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Sighting {
    pub id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The primary-store attributes of a create request.
///
/// Coordinates submitted alongside are not part of this shape; the create
/// request hook reads them from the raw body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSighting {
    pub description: String,
}

//! Primary record store (libSQL) configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("sightings.db")
}

fn default_collection() -> String {
    String::from("sightings")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrimaryConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Collection name used in the record routes.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for PrimaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            collection: default_collection(),
        }
    }
}

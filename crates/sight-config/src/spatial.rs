//! Spatial index store (`DuckDB`) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("spatial.duckdb")
}

/// Default deadline for a single spatial store call, in milliseconds.
const fn default_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpatialConfig {
    /// `DuckDB` database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Deadline applied to every call against either store.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpatialConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

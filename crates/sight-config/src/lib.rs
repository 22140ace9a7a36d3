//! # sight-config
//!
//! Layered configuration loading for the sightings service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIGHTINGS_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `./sightings.toml`
//! 4. User-level `~/.config/sightings/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SIGHTINGS_SERVER__LISTEN` -> `server.listen`,
//! `SIGHTINGS_SPATIAL__TIMEOUT_MS` -> `spatial.timeout_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sight_config::SightingsConfig;
//!
//! let config = SightingsConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.listen);
//! ```

mod error;
mod primary;
mod server;
mod spatial;

pub use error::ConfigError;
pub use primary::PrimaryConfig;
pub use server::ServerConfig;
pub use spatial::SpatialConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SIGHTINGS_";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "sightings.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SightingsConfig {
    #[serde(default)]
    pub primary: PrimaryConfig,
    #[serde(default)]
    pub spatial: SpatialConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SightingsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.search_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.spatial.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "spatial.timeout_ms".into(),
                reason: "must be at least 1".into(),
            });
        }
        self.server.listen_addr()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sightings").join("config.toml"))
    }
}

//! HTTP server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_listen() -> String {
    String::from("127.0.0.1:8090")
}

fn default_static_dir() -> String {
    String::from("pb_public")
}

/// Maximum number of entries returned by `GET /search`.
const fn default_search_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8090`.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory served for unmatched `GET` paths.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            static_dir: default_static_dir(),
            search_limit: default_search_limit(),
        }
    }
}

impl ServerConfig {
    /// Parse `listen` as a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `listen` is not `host:port`.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "server.listen".into(),
                reason: format!("'{}': {e}", self.listen),
            })
    }

    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }
}

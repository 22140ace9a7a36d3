use std::sync::Arc;

use anyhow::Context;
use sight_config::SightingsConfig;
use sight_core::capability::{PrimaryStore, SpatialIndex};
use sight_core::timeout::{TimedPrimaryStore, TimedSpatialIndex};
use sight_db::service::SightingService;
use sight_lake::SpatialLake;
use sight_search::SightingSearch;
use sight_sync::SyncLayer;

/// Shared application resources initialized once at startup.
///
/// Every handle the HTTP surface and commands use is built here and passed
/// down explicitly. Calls that cross into either store go through a deadline
/// wrapper.
pub struct AppContext {
    pub config: SightingsConfig,
    pub service: Arc<SightingService>,
    pub primary: Arc<dyn PrimaryStore>,
    pub spatial: Arc<dyn SpatialIndex>,
    pub search: SightingSearch,
}

impl AppContext {
    /// Open both stores named by `config` and wire them together.
    ///
    /// # Errors
    ///
    /// Returns an error if either store cannot be opened.
    pub async fn init(config: SightingsConfig) -> anyhow::Result<Self> {
        let lake = if config.spatial.is_in_memory() {
            SpatialLake::open_in_memory()
        } else {
            SpatialLake::open_local(&config.spatial.path)
        }
        .with_context(|| format!("failed to open spatial index at {}", config.spatial.path))?;

        Self::with_lake(config, lake).await
    }

    /// Wire an already-open spatial index to a primary store opened from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the primary store cannot be opened.
    pub async fn with_lake(config: SightingsConfig, lake: SpatialLake) -> anyhow::Result<Self> {
        let deadline = config.spatial.timeout();
        let spatial: Arc<dyn SpatialIndex> =
            Arc::new(TimedSpatialIndex::new(Arc::new(lake), deadline));

        let hooks = Arc::new(SyncLayer::new(Arc::clone(&spatial)));
        let service = Arc::new(
            SightingService::new_local(&config.primary.path, hooks)
                .await
                .with_context(|| format!("failed to open primary store at {}", config.primary.path))?,
        );
        let primary: Arc<dyn PrimaryStore> = Arc::new(TimedPrimaryStore::new(
            Arc::clone(&service) as Arc<dyn PrimaryStore>,
            deadline,
        ));

        let search = SightingSearch::new(Arc::clone(&primary), Arc::clone(&spatial))
            .with_limit(config.server.search_limit);

        tracing::info!(
            primary = %config.primary.path,
            spatial = %config.spatial.path,
            timeout_ms = config.spatial.timeout_ms,
            search_limit = search.limit(),
            "stores wired"
        );

        Ok(Self {
            config,
            service,
            primary,
            spatial,
            search,
        })
    }
}

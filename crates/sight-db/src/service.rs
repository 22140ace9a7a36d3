//! Service layer pairing the primary store with its lifecycle subscriber.
//!
//! `SightingService` wraps `SightingDb` (raw database access) and the
//! `RecordHooks` subscriber that is notified around every mutation. All repo
//! methods are implemented as `impl SightingService`.

use std::sync::Arc;

use async_trait::async_trait;
use sight_core::capability::PrimaryStore;
use sight_core::entities::Sighting;
use sight_core::errors::CoreError;
use sight_core::hooks::RecordHooks;

use crate::SightingDb;
use crate::error::DatabaseError;

/// Orchestrates primary-store mutations with lifecycle events.
///
/// Every create follows this protocol:
/// 1. `on_create_request` stages the submitted location
/// 2. Generate identity and insert the row (committed)
/// 3. `on_create_committed` receives the record and the staged location
/// 4. `on_enrich` produces the response
///
/// Deletes remove the row first and then raise `on_after_delete`.
pub struct SightingService {
    db: SightingDb,
    hooks: Arc<dyn RecordHooks>,
}

impl SightingService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `hooks` - Subscriber to lifecycle events.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        hooks: Arc<dyn RecordHooks>,
    ) -> Result<Self, DatabaseError> {
        let db = SightingDb::open_local(db_path).await?;
        Ok(Self { db, hooks })
    }

    /// Create from an existing `SightingDb`.
    #[must_use]
    pub fn from_db(db: SightingDb, hooks: Arc<dyn RecordHooks>) -> Self {
        Self { db, hooks }
    }

    /// Access the underlying database.
    #[must_use]
    pub const fn db(&self) -> &SightingDb {
        &self.db
    }

    /// Access the lifecycle subscriber.
    #[must_use]
    pub fn hooks(&self) -> &dyn RecordHooks {
        self.hooks.as_ref()
    }
}

#[async_trait]
impl PrimaryStore for SightingService {
    async fn find_sighting(&self, id: &str) -> Result<Option<Sighting>, CoreError> {
        Ok(Self::find_sighting(self, id).await?)
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.list_sighting_ids().await?)
    }
}

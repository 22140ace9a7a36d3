use std::sync::Arc;

use sight_core::capability::{PrimaryStore, SpatialIndex};
use sight_core::geo::Coordinate;
use sight_core::responses::MergedResult;

use crate::error::SearchError;
use crate::query::SearchParams;

/// Number of results a search returns unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

/// Federates nearest-neighbour ranking in the spatial index with record
/// lookups in the primary store.
pub struct SightingSearch {
    primary: Arc<dyn PrimaryStore>,
    spatial: Arc<dyn SpatialIndex>,
    limit: u32,
}

impl SightingSearch {
    #[must_use]
    pub fn new(primary: Arc<dyn PrimaryStore>, spatial: Arc<dyn SpatialIndex>) -> Self {
        Self {
            primary,
            spatial,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Override the result limit. Zero is raised to one.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Nearest sightings to `origin`, ascending by distance in metres.
    ///
    /// Ranked matches whose primary record is missing, or whose lookup fails,
    /// are left out.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Ranking`] if the spatial index cannot rank.
    pub async fn search_near(&self, origin: Coordinate) -> Result<Vec<MergedResult>, SearchError> {
        let ranked = self
            .spatial
            .nearest(origin, self.limit)
            .await
            .map_err(SearchError::Ranking)?;

        let mut merged = Vec::with_capacity(ranked.len());
        for matched in &ranked {
            match self.primary.find_sighting(&matched.sighting_id).await {
                Ok(Some(sighting)) => merged.push(MergedResult::join(sighting, matched)),
                Ok(None) => {
                    tracing::debug!(sighting_id = %matched.sighting_id, "dropping orphan point");
                }
                Err(error) => {
                    tracing::warn!(
                        sighting_id = %matched.sighting_id,
                        %error,
                        "primary lookup failed; dropping match"
                    );
                }
            }
        }

        tracing::debug!(
            ranked = ranked.len(),
            returned = merged.len(),
            "search federated"
        );
        Ok(merged)
    }

    /// Search from raw query parameters.
    ///
    /// Never fails: invalid input and ranking failures both produce an empty
    /// list.
    pub async fn search(&self, params: &SearchParams) -> Vec<MergedResult> {
        let origin = match params.origin() {
            Ok(origin) => origin,
            Err(error) => {
                tracing::debug!(%error, "search input rejected");
                return Vec::new();
            }
        };
        match self.search_near(origin).await {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(%error, "search degraded to empty result");
                Vec::new()
            }
        }
    }
}

use sight_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("primary store scan failed: {0}")]
    Primary(#[source] CoreError),
    #[error("spatial index scan failed: {0}")]
    Spatial(#[source] CoreError),
}

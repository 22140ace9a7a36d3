//! # sight-sync
//!
//! Keeps the spatial index in step with the primary store.
//!
//! [`SyncLayer`] subscribes to primary-store lifecycle events and drives an
//! injected [`SpatialIndex`](sight_core::capability::SpatialIndex) handle:
//!
//! - create request: stage the submitted coordinate ([`payload`])
//! - create committed: write the point under the new identity (fatal on failure)
//! - enrich: read the point back, zero on any failure
//! - after delete: remove the point (missing is fine, other failures are fatal)
//!
//! The layer holds no state of its own beyond the handle.
//!
//! [`consistency::consistency_report`] compares the key sets of both stores
//! and reports divergence without repairing it.

pub mod consistency;
pub mod error;
mod layer;
pub mod payload;

pub use consistency::consistency_report;
pub use error::SyncError;
pub use layer::SyncLayer;

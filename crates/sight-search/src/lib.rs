//! # sight-search
//!
//! Query federation for sightings.
//!
//! A search ranks spatial points by distance to the query point, then joins
//! each match back to its primary record. Matches whose record is gone or
//! cannot be read are dropped. The spatial ranking order is kept as is.

pub mod error;
pub mod federation;
pub mod query;

pub use error::SearchError;
pub use federation::{DEFAULT_RESULT_LIMIT, SightingSearch};
pub use query::SearchParams;

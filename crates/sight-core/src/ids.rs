//! ID prefix constants.
//!
//! Identities are minted by the primary store as `{prefix}-{8 hex chars}`,
//! e.g. `sgt-3fa9c21b`. The same string is the spatial index key.

/// Prefix for sighting records.
pub const PREFIX_SIGHTING: &str = "sgt";

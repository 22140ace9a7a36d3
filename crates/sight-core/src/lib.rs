//! # sight-core
//!
//! Core types, capability traits, and error types for the sightings service.
//!
//! A sighting is one logical entity split across two stores:
//! - the primary record store owns identity and description
//! - the spatial index store owns the coordinate, keyed by the same identity
//!
//! This crate provides what both sides and the mediators between them share:
//! - Entity structs for persisted records and spatial points
//! - Wire types returned to HTTP callers (enriched records, merged results)
//! - The `SpatialIndex` and `PrimaryStore` capability traits
//! - The `RecordHooks` lifecycle contract raised by the primary store
//! - Deadline wrappers that turn slow store calls into transport errors
//! - Cross-cutting error types

pub mod capability;
pub mod entities;
pub mod errors;
pub mod geo;
pub mod hooks;
pub mod ids;
pub mod responses;
pub mod timeout;

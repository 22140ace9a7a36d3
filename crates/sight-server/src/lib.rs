//! # sight-server
//!
//! The `sightd` binary's building blocks: CLI definition, configuration
//! bootstrap, store wiring, and the axum HTTP surface.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod routes;

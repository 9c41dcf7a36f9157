//! Data-driven island layouts and navigation configuration.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Island layouts: tiles, buildings and roads (RON)
//! - Navigation configuration (TOML)
//! - Scripted world events replayed against a loaded island
//!
//! Loaders produce `pathing-core` types directly; nothing here is needed at
//! runtime once an [`pathing_core::Island`] has been built.

pub mod loaders;

pub use loaders::{
    ConfigLoader, EventOutcome, IslandLoader, IslandScenario, LoadResult, WorldEvent, replay,
};

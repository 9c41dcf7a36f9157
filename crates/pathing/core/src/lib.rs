//! Walkable path nodes and road cost overlays for tiled islands.
//!
//! `pathing-core` keeps the data a path search needs up to date while the
//! world changes underneath it. The [`nodes::WalkabilityIndex`] is built once
//! per island by a full scan and afterwards corrected one coordinate at a
//! time; the [`nodes::RoadCostRegistry`] tracks which coordinates lie under a
//! road and what moving across them costs. Search engines pull both through a
//! [`nodes::PathView`] when they need a route.
//!
//! Terrain is reached through the [`terrain::Region`] trait, so the index works
//! against any tile store. [`island::Island`] is the bundled owner that keeps
//! terrain, buildings, roads and the indexes in step.
pub mod config;
pub mod coord;
pub mod error;
pub mod island;
pub mod nodes;
pub mod terrain;

pub use config::NavConfig;
pub use coord::{Coord, Footprint, RadiusMetric};
pub use error::{ErrorSeverity, NavError};
pub use island::{Building, BuildingId, Island, IslandError, RoadId, RoadSegment};
pub use nodes::{
    InteractionNodeSet, MoveCost, NodeChange, NodeSet, PathNodes, PathView, PointOfInterest, Road,
    RoadCostRegistry, RoadError, WalkabilityIndex, is_walkable,
};
pub use terrain::{Occupant, Region, RegionId, TileClasses, TileView};

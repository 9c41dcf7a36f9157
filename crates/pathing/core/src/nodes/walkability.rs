use tracing::Span;

use crate::coord::Coord;
use crate::terrain::{Region, RegionId};

use super::{NodeSet, PathNodes};

/// Check if a unit may walk on the tile at `coord`.
///
/// A coordinate is walkable when the region has a tile there, the tile is
/// `CONSTRUCTIBLE` (which rules out water, coast and similar natural ground),
/// and any occupant blocking it is itself walkable. Nature tiles such as trees
/// are constructible and therefore walkable, so they cannot be used as walls.
pub fn is_walkable<R: Region>(region: &R, coord: Coord) -> bool {
    let Some(tile) = region.tile(coord) else {
        return false;
    };

    if !tile.classes().is_constructible() {
        return false;
    }

    match tile.occupant() {
        Some(occupant) => occupant.is_walkable(),
        None => true,
    }
}

/// Outcome of reconciling one coordinate with the terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeChange {
    Inserted,
    Removed,
    Unchanged,
}

/// Set of walkable coordinates on one region.
///
/// Built by a full scan in [`WalkabilityIndex::new`]; afterwards the owner
/// calls [`reset_tile_walkability`](Self::reset_tile_walkability) for every
/// coordinate whose tile or occupant may have changed. The index is not
/// refreshed on its own.
///
/// Only the region's [`RegionId`] is stored. The owner passes the region back
/// in on every update and must drop the index no later than the region.
#[derive(Clone, Debug)]
pub struct WalkabilityIndex {
    region: RegionId,
    nodes: NodeSet,
    span: Span,
}

impl WalkabilityIndex {
    /// Scans `region` and records every walkable coordinate.
    pub fn new<R: Region>(region: &R) -> Self {
        let span = tracing::debug_span!("path_nodes", region = %region.id());
        Self::with_span(region, span)
    }

    /// Like [`new`](Self::new), logging every event under the provided span.
    pub fn with_span<R: Region>(region: &R, span: Span) -> Self {
        let nodes: NodeSet = {
            let _guard = span.enter();
            let nodes: NodeSet = region
                .coords()
                .filter(|&coord| is_walkable(region, coord))
                .collect();
            tracing::debug!(walkable = nodes.len(), "built walkable node index");
            nodes
        };

        Self {
            region: region.id(),
            nodes,
            span,
        }
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    /// Re-evaluates `coord` against the terrain and fixes the node set.
    ///
    /// Repeated calls without an intervening terrain change return
    /// [`NodeChange::Unchanged`]. `coord` must lie within the region's extent.
    pub fn reset_tile_walkability<R: Region>(&mut self, region: &R, coord: Coord) -> NodeChange {
        debug_assert_eq!(
            region.id(),
            self.region,
            "walkability index updated against a foreign region"
        );
        debug_assert!(
            region.contains(coord),
            "coordinate {coord} is outside {}",
            self.region
        );

        let _guard = self.span.enter();
        let walkable = is_walkable(region, coord);

        if walkable && self.nodes.insert(coord) {
            tracing::trace!(%coord, "coordinate became walkable");
            NodeChange::Inserted
        } else if !walkable && self.nodes.remove(&coord) {
            tracing::trace!(%coord, "coordinate no longer walkable");
            NodeChange::Removed
        } else {
            NodeChange::Unchanged
        }
    }
}

impl PathNodes for WalkabilityIndex {
    fn nodes(&self) -> &NodeSet {
        &self.nodes
    }
}

//! Coordinate sets and cost overlays handed to the path search.
//!
//! - [`WalkabilityIndex`]: every walkable coordinate of one region, kept
//!   current through [`WalkabilityIndex::reset_tile_walkability`].
//! - [`RoadCostRegistry`]: coordinate → movement cost for tiles under a road.
//! - [`InteractionNodeSet`]: fixed standing positions around a building.
//!
//! The search engine never receives pushes from here; it reads a [`PathView`]
//! whenever it needs to plan.
mod interaction;
mod roads;
mod walkability;

pub use interaction::{InteractionNodeSet, PointOfInterest};
pub use roads::{MoveCost, Road, RoadCostRegistry, RoadError};
pub use walkability::{NodeChange, WalkabilityIndex, is_walkable};

use rustc_hash::FxHashSet;

use crate::coord::Coord;

/// Unordered set of coordinates. Iteration order is unspecified.
pub type NodeSet = FxHashSet<Coord>;

/// Common read interface of every node set consumed by the path search.
pub trait PathNodes {
    /// Current nodes. Mutation only happens through the owning type.
    fn nodes(&self) -> &NodeSet;

    fn contains(&self, coord: Coord) -> bool {
        self.nodes().contains(&coord)
    }

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// Read-only view combining walkable nodes with the road cost overlay.
#[derive(Clone, Copy, Debug)]
pub struct PathView<'a> {
    nodes: &'a NodeSet,
    roads: &'a RoadCostRegistry,
    base_step_cost: MoveCost,
}

impl<'a> PathView<'a> {
    pub fn new(
        walkable: &'a WalkabilityIndex,
        roads: &'a RoadCostRegistry,
        base_step_cost: MoveCost,
    ) -> Self {
        Self {
            nodes: walkable.nodes(),
            roads,
            base_step_cost,
        }
    }

    pub fn nodes(&self) -> &'a NodeSet {
        self.nodes
    }

    pub fn road_costs(&self) -> &'a RoadCostRegistry {
        self.roads
    }

    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.nodes.contains(&coord)
    }

    /// Cost of stepping onto `coord`, or `None` when it is not walkable.
    ///
    /// Road costs only apply to coordinates that are also walkable nodes.
    pub fn step_cost(&self, coord: Coord) -> Option<MoveCost> {
        if !self.nodes.contains(&coord) {
            return None;
        }
        Some(self.roads.cost(coord).unwrap_or(self.base_step_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Region, RegionId, TileClasses, TileView};

    struct Strip;

    impl Region for Strip {
        fn id(&self) -> RegionId {
            RegionId(7)
        }

        fn contains(&self, coord: Coord) -> bool {
            coord.y == 0 && (0..4).contains(&coord.x)
        }

        fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
            (0..4).map(|x| Coord::new(x, 0))
        }

        fn tile(&self, coord: Coord) -> Option<TileView<'_>> {
            match coord.x {
                3 => Some(TileView::new(TileClasses::WATER)),
                _ if self.contains(coord) => Some(TileView::new(TileClasses::GROUND)),
                _ => None,
            }
        }
    }

    #[test]
    fn step_cost_prefers_road_cost_on_walkable_nodes() {
        let index = WalkabilityIndex::new(&Strip);
        let mut roads = RoadCostRegistry::new();
        roads.register_road(&vec![Coord::new(1, 0), Coord::new(3, 0)]);
        let view = PathView::new(&index, &roads, MoveCost(4));

        assert_eq!(view.step_cost(Coord::new(0, 0)), Some(MoveCost(4)));
        assert_eq!(view.step_cost(Coord::new(1, 0)), Some(MoveCost::ROAD));
        // road over water does not make it walkable
        assert_eq!(view.step_cost(Coord::new(3, 0)), None);
        assert_eq!(view.step_cost(Coord::new(9, 9)), None);
    }
}

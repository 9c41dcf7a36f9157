use crate::coord::{Footprint, RadiusMetric};

use super::{NodeSet, PathNodes};

/// A building agents walk up to, such as a consumer collecting goods.
pub trait PointOfInterest {
    fn footprint(&self) -> Footprint;

    fn interaction_radius(&self) -> u32;
}

/// Fixed standing positions around a point of interest.
///
/// Computed once when the building is placed and never updated. If the
/// footprint or radius changes the owner discards it and computes a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionNodeSet {
    nodes: NodeSet,
}

impl InteractionNodeSet {
    /// Coordinates within Chebyshev `radius` of `footprint`, footprint excluded.
    pub fn compute(footprint: impl Into<Footprint>, radius: u32) -> Self {
        Self::compute_with(footprint, radius, RadiusMetric::Chebyshev)
    }

    pub fn compute_with(
        footprint: impl Into<Footprint>,
        radius: u32,
        metric: RadiusMetric,
    ) -> Self {
        let nodes = footprint.into().radius_coords(radius, metric).collect();
        Self { nodes }
    }

    pub fn for_building<P: PointOfInterest + ?Sized>(building: &P, metric: RadiusMetric) -> Self {
        Self::compute_with(building.footprint(), building.interaction_radius(), metric)
    }
}

impl PathNodes for InteractionNodeSet {
    fn nodes(&self) -> &NodeSet {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn radius_zero_is_empty() {
        assert!(InteractionNodeSet::compute(Coord::new(5, 5), 0).is_empty());
    }

    #[test]
    fn ring_surrounds_multi_tile_footprint() {
        let footprint = Footprint::new(Coord::new(0, 0), 2, 2);
        let set = InteractionNodeSet::compute(footprint, 1);

        // 4x4 box minus the 2x2 footprint
        assert_eq!(set.len(), 12);
        assert!(!set.contains(Coord::new(1, 1)));
        assert!(set.contains(Coord::new(-1, -1)));
        assert!(set.contains(Coord::new(2, 2)));
    }
}

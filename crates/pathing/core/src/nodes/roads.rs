use std::fmt;

use rustc_hash::FxHashMap;
use tracing::Span;

use crate::coord::Coord;
use crate::error::{ErrorSeverity, NavError};

/// Movement cost for entering a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCost(pub u32);

impl MoveCost {
    /// Every road currently moves units at the same speed.
    pub const ROAD: Self = Self(1);
}

impl Default for MoveCost {
    fn default() -> Self {
        Self::ROAD
    }
}

impl fmt::Display for MoveCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A structure whose footprint speeds up movement.
pub trait Road {
    /// Coordinates covered by the road.
    fn footprint(&self) -> &[Coord];

    /// Cost of moving across `coord`. Uniform unless overridden.
    fn move_cost(&self, _coord: Coord) -> MoveCost {
        MoveCost::ROAD
    }
}

impl Road for [Coord] {
    fn footprint(&self) -> &[Coord] {
        self
    }
}

impl Road for Vec<Coord> {
    fn footprint(&self) -> &[Coord] {
        self
    }
}

/// Errors raised by [`RoadCostRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadError {
    /// A road being removed covers a coordinate the registry does not hold.
    ///
    /// Means a registration was skipped or the footprint changed between
    /// register and unregister.
    #[error("road coordinate {coord} is not registered")]
    NotRegistered { coord: Coord },
}

impl NavError for RoadError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RoadError::NotRegistered { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RoadError::NotRegistered { .. } => "ROAD_NOT_REGISTERED",
        }
    }
}

/// Coordinate → movement cost overlay for tiles under a road.
///
/// Overlapping roads overwrite each other's entries; nothing is reference
/// counted. Presence in the registry says nothing about walkability.
#[derive(Clone, Debug)]
pub struct RoadCostRegistry {
    costs: FxHashMap<Coord, MoveCost>,
    span: Span,
}

impl RoadCostRegistry {
    pub fn new() -> Self {
        Self::with_span(tracing::debug_span!("road_costs"))
    }

    pub fn with_span(span: Span) -> Self {
        Self {
            costs: FxHashMap::default(),
            span,
        }
    }

    /// Records the road's cost for every coordinate of its footprint.
    pub fn register_road<R: Road + ?Sized>(&mut self, road: &R) {
        let _guard = self.span.enter();
        let footprint = road.footprint();

        for &coord in footprint {
            self.costs.insert(coord, road.move_cost(coord));
        }

        tracing::trace!(tiles = footprint.len(), "registered road");
    }

    /// Removes every coordinate of the road's footprint.
    ///
    /// The whole footprint is checked first. If any coordinate is missing the
    /// registry is left untouched and [`RoadError::NotRegistered`] names the
    /// first one.
    pub fn unregister_road<R: Road + ?Sized>(&mut self, road: &R) -> Result<(), RoadError> {
        let _guard = self.span.enter();
        let footprint = road.footprint();

        let missing = footprint
            .iter()
            .find(|&&coord| !self.costs.contains_key(&coord));
        if let Some(&coord) = missing {
            return Err(RoadError::NotRegistered { coord });
        }

        for coord in footprint {
            self.costs.remove(coord);
        }

        tracing::trace!(tiles = footprint.len(), "unregistered road");
        Ok(())
    }

    pub fn cost(&self, coord: Coord) -> Option<MoveCost> {
        self.costs.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.costs.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn costs(&self) -> &FxHashMap<Coord, MoveCost> {
        &self.costs
    }
}

impl Default for RoadCostRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Read-only terrain access consumed by the node sets.
//!
//! The index never owns terrain. Everything it learns about a coordinate comes
//! through [`Region::tile`], which returns a short-lived [`TileView`].
mod classes;

pub use classes::TileClasses;

use std::fmt;

use crate::coord::Coord;

/// Handle naming a region in its owner's table.
///
/// Node sets keep this instead of a reference so they can never extend the
/// lifetime of the region they describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// A bounded, enumerable area of the tiled world.
pub trait Region {
    fn id(&self) -> RegionId;

    /// Returns true if `coord` lies within the region's extent.
    fn contains(&self, coord: Coord) -> bool;

    /// Enumerates every coordinate of the region's extent.
    fn coords(&self) -> impl Iterator<Item = Coord> + '_;

    /// Tile at `coord`, or `None` when the region has no tile there.
    fn tile(&self, coord: Coord) -> Option<TileView<'_>>;
}

/// An object standing on a tile and blocking it.
pub trait Occupant {
    /// Whether units may walk across the occupied tile anyway (roads, low fences).
    fn is_walkable(&self) -> bool;
}

/// Borrowed snapshot of one tile's classification and occupancy.
#[derive(Clone, Copy)]
pub struct TileView<'a> {
    classes: TileClasses,
    occupant: Option<&'a dyn Occupant>,
}

impl<'a> TileView<'a> {
    pub fn new(classes: TileClasses) -> Self {
        Self {
            classes,
            occupant: None,
        }
    }

    pub fn with_occupant(mut self, occupant: &'a dyn Occupant) -> Self {
        self.occupant = Some(occupant);
        self
    }

    pub fn classes(&self) -> TileClasses {
        self.classes
    }

    /// True when an occupant sits on the tile.
    pub fn is_blocked(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&'a dyn Occupant> {
        self.occupant
    }
}

impl fmt::Debug for TileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileView")
            .field("classes", &self.classes)
            .field("blocked", &self.is_blocked())
            .field(
                "occupant_walkable",
                &self.occupant.map(|occupant| occupant.is_walkable()),
            )
            .finish()
    }
}

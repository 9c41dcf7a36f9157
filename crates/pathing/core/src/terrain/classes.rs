bitflags::bitflags! {
    /// Classification tags carried by a tile.
    ///
    /// Tiles usually carry several tags at once: a forest tile is both
    /// `CONSTRUCTIBLE` and `NATURE`, a beach is `COAST` without `CONSTRUCTIBLE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TileClasses: u16 {
        /// Buildings may be placed here. Doubles as the walkable-ground tag.
        const CONSTRUCTIBLE = 1 << 0;
        const WATER = 1 << 1;
        const COAST = 1 << 2;
        /// Natural decoration such as trees.
        const NATURE = 1 << 3;
    }
}

impl TileClasses {
    /// Plain buildable ground.
    pub const GROUND: Self = Self::CONSTRUCTIBLE;
    /// Buildable ground covered by trees.
    pub const FOREST: Self = Self::CONSTRUCTIBLE.union(Self::NATURE);

    pub fn is_constructible(self) -> bool {
        self.contains(Self::CONSTRUCTIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forest_is_constructible_ground() {
        assert!(TileClasses::FOREST.is_constructible());
        assert!(TileClasses::FOREST.contains(TileClasses::NATURE));
        assert!(!(TileClasses::WATER | TileClasses::COAST).is_constructible());
    }
}

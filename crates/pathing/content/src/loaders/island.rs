//! Island layout loader.
//!
//! An island file lists its extent, the classes of tiles that differ from the
//! default, holes, and the buildings and roads standing on it at load time.
//! Structures are placed through [`Island`] itself, so the loaded node sets are
//! identical to what replaying the same construction events would produce.
//!
//! An optional `events` list describes world changes to replay after loading;
//! see [`crate::loaders::events`].

use std::collections::HashSet;
use std::path::Path;

use pathing_core::{
    Building, Coord, Footprint, Island, NavConfig, PathNodes, RegionId, TileClasses,
};
use serde::{Deserialize, Serialize};

use crate::loaders::events::WorldEvent;
use crate::loaders::{LoadResult, read_file};

/// Island data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IslandDataRon {
    id: u32,
    dimensions: (u32, u32),
    #[serde(default = "default_classes")]
    default_classes: TileClasses,
    #[serde(default)]
    tiles: Vec<(i32, i32, TileClasses)>, // (x, y, classes)
    #[serde(default)]
    holes: Vec<(i32, i32)>,
    #[serde(default)]
    buildings: Vec<BuildingRon>,
    #[serde(default)]
    roads: Vec<Vec<(i32, i32)>>,
    #[serde(default)]
    events: Vec<WorldEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BuildingRon {
    pub(crate) origin: (i32, i32),
    #[serde(default = "single_tile")]
    pub(crate) size: (u32, u32),
    #[serde(default)]
    pub(crate) walkable: bool,
    #[serde(default)]
    pub(crate) radius: u32,
}

impl BuildingRon {
    pub(crate) fn to_building(&self) -> Building {
        let (x, y) = self.origin;
        let footprint = Footprint::new(Coord::new(x, y), self.size.0, self.size.1);
        Building::new(footprint)
            .with_walkable(self.walkable)
            .with_interaction_radius(self.radius)
    }
}

/// An island together with the world events scripted for it.
#[derive(Debug)]
pub struct IslandScenario {
    pub island: Island,
    pub events: Vec<WorldEvent>,
}

fn default_classes() -> TileClasses {
    TileClasses::GROUND
}

fn single_tile() -> (u32, u32) {
    (1, 1)
}

/// Loader for island layouts from RON files.
pub struct IslandLoader;

impl IslandLoader {
    /// Load an island from a RON file, ignoring any scripted events.
    pub fn load(path: &Path, config: NavConfig) -> LoadResult<Island> {
        Self::load_scenario(path, config).map(|scenario| scenario.island)
    }

    /// Load an island and its scripted events from a RON file.
    pub fn load_scenario(path: &Path, config: NavConfig) -> LoadResult<IslandScenario> {
        let content = read_file(path)?;
        Self::parse_scenario(&content, config)
    }

    pub fn parse(content: &str, config: NavConfig) -> LoadResult<Island> {
        Self::parse_scenario(content, config).map(|scenario| scenario.island)
    }

    pub fn parse_scenario(content: &str, config: NavConfig) -> LoadResult<IslandScenario> {
        let data: IslandDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse island RON: {}", e))?;

        let (width, height) = data.dimensions;
        let max_x = i32::try_from(width)
            .map_err(|_| anyhow::anyhow!("Island width {width} exceeds the coordinate range"))?;
        let max_y = i32::try_from(height)
            .map_err(|_| anyhow::anyhow!("Island height {height} exceeds the coordinate range"))?;
        let holes: HashSet<(i32, i32)> = data.holes.into_iter().collect();

        // Fill the extent with the default classes first, skipping holes
        let mut tiles = Vec::new();
        for y in 0..max_y {
            for x in 0..max_x {
                if !holes.contains(&(x, y)) {
                    tiles.push((Coord::new(x, y), data.default_classes));
                }
            }
        }
        // Then override with explicitly defined tiles
        for (x, y, classes) in data.tiles {
            tiles.push((Coord::new(x, y), classes));
        }

        let mut island = Island::from_tiles(RegionId(data.id), width, height, tiles, config);

        for spec in data.buildings {
            let (x, y) = spec.origin;
            island
                .place_building(spec.to_building())
                .map_err(|e| anyhow::anyhow!("Failed to place building at ({x}, {y}): {e}"))?;
        }

        for (index, road) in data.roads.into_iter().enumerate() {
            let coords = road.into_iter().map(Coord::from).collect();
            island
                .build_road(coords)
                .map_err(|e| anyhow::anyhow!("Failed to build road {index}: {e}"))?;
        }

        tracing::debug!(
            island = data.id,
            walkable = island.path_nodes().len(),
            events = data.events.len(),
            "loaded island"
        );
        Ok(IslandScenario {
            island,
            events: data.events,
        })
    }
}

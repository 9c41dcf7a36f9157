//! Concrete island that owns its terrain together with the node sets.
//!
//! [`Island`] is the reference owner of a [`WalkabilityIndex`] and a
//! [`RoadCostRegistry`]. Every mutation that can change walkability (placing
//! or removing a building, building or destroying a road, changing a tile's
//! classes) resets the affected coordinates before returning, so the indexes
//! always describe the current terrain.
use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::config::NavConfig;
use crate::coord::{Coord, Footprint};
use crate::error::{ErrorSeverity, NavError};
use crate::nodes::{
    InteractionNodeSet, MoveCost, PathView, PointOfInterest, Road, RoadCostRegistry, RoadError,
    WalkabilityIndex,
};
use crate::terrain::{Occupant, Region, RegionId, TileClasses, TileView};

/// Identifier of a building placed on an island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingId(pub u32);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "building#{}", self.0)
    }
}

/// Identifier of a road built on an island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadId(pub u32);

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "road#{}", self.0)
    }
}

/// A building occupying a rectangular footprint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    footprint: Footprint,
    walkable: bool,
    interaction_radius: u32,
}

impl Building {
    /// A solid building without interaction nodes.
    pub fn new(footprint: impl Into<Footprint>) -> Self {
        Self {
            footprint: footprint.into(),
            walkable: false,
            interaction_radius: 0,
        }
    }

    /// Marks the building as passable, e.g. a low fence.
    pub fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Gives the building a ring of interaction nodes of the given radius.
    pub fn with_interaction_radius(mut self, radius: u32) -> Self {
        self.interaction_radius = radius;
        self
    }
}

impl Occupant for Building {
    fn is_walkable(&self) -> bool {
        self.walkable
    }
}

impl PointOfInterest for Building {
    fn footprint(&self) -> Footprint {
        self.footprint
    }

    fn interaction_radius(&self) -> u32 {
        self.interaction_radius
    }
}

/// A road covering an arbitrary sequence of tiles at a uniform cost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    tiles: Vec<Coord>,
    cost: MoveCost,
}

impl RoadSegment {
    pub fn new(tiles: Vec<Coord>, cost: MoveCost) -> Self {
        Self { tiles, cost }
    }

    pub fn cost(&self) -> MoveCost {
        self.cost
    }
}

impl Road for RoadSegment {
    fn footprint(&self) -> &[Coord] {
        &self.tiles
    }

    fn move_cost(&self, _coord: Coord) -> MoveCost {
        self.cost
    }
}

impl Occupant for RoadSegment {
    fn is_walkable(&self) -> bool {
        true
    }
}

/// Errors raised while mutating an [`Island`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IslandError {
    #[error("coordinate {coord} is outside the island")]
    OutOfBounds { coord: Coord },

    #[error("tile {coord} is missing or not constructible")]
    NotConstructible { coord: Coord },

    #[error("tile {coord} is already occupied")]
    TileOccupied { coord: Coord },

    #[error("road has an empty footprint")]
    EmptyRoad,

    #[error("interaction radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },

    #[error("{0} does not exist")]
    UnknownBuilding(BuildingId),

    #[error("{0} does not exist")]
    UnknownRoad(RoadId),

    #[error(transparent)]
    Road(#[from] RoadError),
}

impl NavError for IslandError {
    fn severity(&self) -> ErrorSeverity {
        use IslandError::*;
        match self {
            TileOccupied { .. } => ErrorSeverity::Recoverable,
            OutOfBounds { .. }
            | NotConstructible { .. }
            | EmptyRoad
            | RadiusTooLarge { .. }
            | UnknownBuilding(_)
            | UnknownRoad(_) => ErrorSeverity::Validation,
            IslandError::Road(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use IslandError::*;
        match self {
            OutOfBounds { .. } => "ISLAND_OUT_OF_BOUNDS",
            NotConstructible { .. } => "ISLAND_NOT_CONSTRUCTIBLE",
            TileOccupied { .. } => "ISLAND_TILE_OCCUPIED",
            EmptyRoad => "ISLAND_EMPTY_ROAD",
            RadiusTooLarge { .. } => "ISLAND_RADIUS_TOO_LARGE",
            UnknownBuilding(_) => "ISLAND_UNKNOWN_BUILDING",
            UnknownRoad(_) => "ISLAND_UNKNOWN_ROAD",
            IslandError::Road(err) => err.error_code(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TileOccupant {
    Building(BuildingId),
    Road(RoadId),
}

/// Tiles, occupancy and structures of one island.
#[derive(Clone, Debug)]
struct Terrain {
    id: RegionId,
    width: u32,
    height: u32,
    tiles: FxHashMap<Coord, TileClasses>,
    occupancy: FxHashMap<Coord, TileOccupant>,
    buildings: BTreeMap<BuildingId, Building>,
    roads: BTreeMap<RoadId, RoadSegment>,
}

impl Terrain {
    fn ensure_free(&self, coord: Coord) -> Result<(), IslandError> {
        if !self.contains(coord) {
            return Err(IslandError::OutOfBounds { coord });
        }
        match self.tiles.get(&coord) {
            Some(classes) if classes.is_constructible() => {}
            _ => return Err(IslandError::NotConstructible { coord }),
        }
        if self.occupancy.contains_key(&coord) {
            return Err(IslandError::TileOccupied { coord });
        }
        Ok(())
    }
}

impl Region for Terrain {
    fn id(&self) -> RegionId {
        self.id
    }

    fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && i64::from(coord.x) < i64::from(self.width)
            && i64::from(coord.y) < i64::from(self.height)
    }

    fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    fn tile(&self, coord: Coord) -> Option<TileView<'_>> {
        let classes = *self.tiles.get(&coord)?;
        let view = TileView::new(classes);

        let occupant: Option<&dyn Occupant> = match self.occupancy.get(&coord) {
            Some(TileOccupant::Building(id)) => {
                self.buildings.get(id).map(|b| b as &dyn Occupant)
            }
            Some(TileOccupant::Road(id)) => self.roads.get(id).map(|r| r as &dyn Occupant),
            None => None,
        };

        Some(match occupant {
            Some(occupant) => view.with_occupant(occupant),
            None => view,
        })
    }
}

/// A rectangular island with buildings, roads and up-to-date path nodes.
///
/// Coordinates inside the `width` x `height` extent without a tile are holes
/// (open sea); they are never walkable.
#[derive(Clone, Debug)]
pub struct Island {
    terrain: Terrain,
    config: NavConfig,
    path_nodes: WalkabilityIndex,
    road_costs: RoadCostRegistry,
    interaction: FxHashMap<BuildingId, InteractionNodeSet>,
    next_building: u32,
    next_road: u32,
}

impl Island {
    /// An island whose every tile carries `classes`.
    pub fn new(
        id: RegionId,
        width: u32,
        height: u32,
        classes: TileClasses,
        config: NavConfig,
    ) -> Self {
        let tiles = Self::extent(width, height).map(|coord| (coord, classes));
        Self::from_tiles(id, width, height, tiles, config)
    }

    /// An island built from explicit tiles. Tiles outside the extent are dropped.
    pub fn from_tiles(
        id: RegionId,
        width: u32,
        height: u32,
        tiles: impl IntoIterator<Item = (Coord, TileClasses)>,
        config: NavConfig,
    ) -> Self {
        let mut terrain = Terrain {
            id,
            width,
            height,
            tiles: FxHashMap::default(),
            occupancy: FxHashMap::default(),
            buildings: BTreeMap::new(),
            roads: BTreeMap::new(),
        };
        for (coord, classes) in tiles {
            if terrain.contains(coord) {
                terrain.tiles.insert(coord, classes);
            }
        }

        let path_nodes = WalkabilityIndex::new(&terrain);
        let road_costs =
            RoadCostRegistry::with_span(tracing::debug_span!("road_costs", region = %id));

        Self {
            terrain,
            config,
            path_nodes,
            road_costs,
            interaction: FxHashMap::default(),
            next_building: 0,
            next_road: 0,
        }
    }

    fn extent(width: u32, height: u32) -> impl Iterator<Item = Coord> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.terrain.width
    }

    pub fn height(&self) -> u32 {
        self.terrain.height
    }

    pub fn path_nodes(&self) -> &WalkabilityIndex {
        &self.path_nodes
    }

    pub fn road_costs(&self) -> &RoadCostRegistry {
        &self.road_costs
    }

    /// View handed to the path search.
    pub fn path_view(&self) -> PathView<'_> {
        PathView::new(
            &self.path_nodes,
            &self.road_costs,
            MoveCost(self.config.base_step_cost),
        )
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.terrain.buildings.get(&id)
    }

    pub fn buildings(&self) -> impl Iterator<Item = (BuildingId, &Building)> + '_ {
        self.terrain.buildings.iter().map(|(id, b)| (*id, b))
    }

    pub fn road(&self, id: RoadId) -> Option<&RoadSegment> {
        self.terrain.roads.get(&id)
    }

    /// Interaction nodes cached for `id`, if it has an interaction radius.
    pub fn interaction_nodes(&self, id: BuildingId) -> Option<&InteractionNodeSet> {
        self.interaction.get(&id)
    }

    /// Places a building and drops its tiles from the walkable nodes.
    pub fn place_building(&mut self, building: Building) -> Result<BuildingId, IslandError> {
        let max = self.config.max_interaction_radius;
        if building.interaction_radius > max {
            return Err(IslandError::RadiusTooLarge {
                radius: building.interaction_radius,
                max,
            });
        }

        let footprint = building.footprint;
        for coord in footprint.cells() {
            self.terrain.ensure_free(coord)?;
        }

        let id = BuildingId(self.next_building);
        self.next_building += 1;

        if building.interaction_radius > 0 {
            let metric = self.config.interaction_metric;
            let nodes = InteractionNodeSet::for_building(&building, metric);
            self.interaction.insert(id, nodes);
        }

        self.terrain.buildings.insert(id, building);
        for coord in footprint.cells() {
            self.terrain.occupancy.insert(coord, TileOccupant::Building(id));
        }
        self.reset_cells(footprint.cells());

        tracing::debug!(building = %id, origin = %footprint.origin(), "placed building");
        Ok(id)
    }

    /// Removes a building and restores walkability under its footprint.
    pub fn remove_building(&mut self, id: BuildingId) -> Result<Building, IslandError> {
        let building = self
            .terrain
            .buildings
            .remove(&id)
            .ok_or(IslandError::UnknownBuilding(id))?;

        let footprint = building.footprint;
        for coord in footprint.cells() {
            self.terrain.occupancy.remove(&coord);
        }
        self.interaction.remove(&id);
        self.reset_cells(footprint.cells());

        tracing::debug!(building = %id, "removed building");
        Ok(building)
    }

    /// Builds a road at the configured road cost.
    pub fn build_road(&mut self, tiles: Vec<Coord>) -> Result<RoadId, IslandError> {
        let cost = MoveCost(self.config.road_cost);
        self.build_road_segment(RoadSegment::new(tiles, cost))
    }

    /// Builds a road with its own cost.
    pub fn build_road_segment(&mut self, road: RoadSegment) -> Result<RoadId, IslandError> {
        if road.tiles.is_empty() {
            return Err(IslandError::EmptyRoad);
        }
        for (index, &coord) in road.tiles.iter().enumerate() {
            self.terrain.ensure_free(coord)?;
            if road.tiles[..index].contains(&coord) {
                return Err(IslandError::TileOccupied { coord });
            }
        }

        let id = RoadId(self.next_road);
        self.next_road += 1;

        self.road_costs.register_road(&road);
        for &coord in &road.tiles {
            self.terrain.occupancy.insert(coord, TileOccupant::Road(id));
        }
        let tiles = road.tiles.clone();
        self.terrain.roads.insert(id, road);
        self.reset_cells(tiles);

        tracing::debug!(road = %id, "built road");
        Ok(id)
    }

    /// Destroys a road, dropping its cost overlay.
    ///
    /// If the registry has lost track of any of the road's tiles the island is
    /// left unchanged and the desync is returned.
    pub fn destroy_road(&mut self, id: RoadId) -> Result<RoadSegment, IslandError> {
        let road = self
            .terrain
            .roads
            .get(&id)
            .ok_or(IslandError::UnknownRoad(id))?;

        if let Err(err) = self.road_costs.unregister_road(road) {
            tracing::warn!(road = %id, error = %err, "road cost registry out of sync");
            return Err(err.into());
        }

        let road = self
            .terrain
            .roads
            .remove(&id)
            .ok_or(IslandError::UnknownRoad(id))?;
        for coord in &road.tiles {
            self.terrain.occupancy.remove(coord);
        }
        self.reset_cells(road.tiles.iter().copied());

        tracing::debug!(road = %id, "destroyed road");
        Ok(road)
    }

    /// Changes a tile's classification, e.g. when it floods or is drained.
    pub fn set_tile_classes(
        &mut self,
        coord: Coord,
        classes: TileClasses,
    ) -> Result<(), IslandError> {
        if !self.terrain.contains(coord) {
            return Err(IslandError::OutOfBounds { coord });
        }
        self.terrain.tiles.insert(coord, classes);
        self.path_nodes.reset_tile_walkability(&self.terrain, coord);
        Ok(())
    }

    /// Removes the tile entirely, leaving a hole in the island.
    pub fn remove_tile(&mut self, coord: Coord) -> Result<(), IslandError> {
        if !self.terrain.contains(coord) {
            return Err(IslandError::OutOfBounds { coord });
        }
        if self.terrain.occupancy.contains_key(&coord) {
            return Err(IslandError::TileOccupied { coord });
        }
        self.terrain.tiles.remove(&coord);
        self.path_nodes.reset_tile_walkability(&self.terrain, coord);
        Ok(())
    }

    fn reset_cells(&mut self, cells: impl IntoIterator<Item = Coord>) {
        for coord in cells {
            self.path_nodes.reset_tile_walkability(&self.terrain, coord);
        }
    }
}

impl Region for Island {
    fn id(&self) -> RegionId {
        self.terrain.id
    }

    fn contains(&self, coord: Coord) -> bool {
        self.terrain.contains(coord)
    }

    fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.terrain.coords()
    }

    fn tile(&self, coord: Coord) -> Option<TileView<'_>> {
        self.terrain.tile(coord)
    }
}

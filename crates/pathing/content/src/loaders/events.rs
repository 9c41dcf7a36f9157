//! Scripted world events replayed against a loaded island.
//!
//! Events mirror the mutations an owner performs during play. Buildings and
//! roads are referenced by the ids the island hands out, which are assigned in
//! load order starting at 0 and continue through the script.

use pathing_core::{BuildingId, Coord, Island, IslandError, PathNodes, RoadId, TileClasses};
use serde::{Deserialize, Serialize};

use crate::loaders::LoadResult;
use crate::loaders::island::BuildingRon;

/// One world change, as written in an island file's `events` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorldEvent {
    PlaceBuilding {
        origin: (i32, i32),
        #[serde(default = "single_tile")]
        size: (u32, u32),
        #[serde(default)]
        walkable: bool,
        #[serde(default)]
        radius: u32,
    },
    RemoveBuilding(u32),
    BuildRoad(Vec<(i32, i32)>),
    DestroyRoad(u32),
    SetTile {
        x: i32,
        y: i32,
        classes: TileClasses,
    },
    RemoveTile {
        x: i32,
        y: i32,
    },
}

fn single_tile() -> (u32, u32) {
    (1, 1)
}

impl WorldEvent {
    /// Applies the event through the island's own mutation methods.
    pub fn apply(&self, island: &mut Island) -> Result<(), IslandError> {
        match self {
            WorldEvent::PlaceBuilding {
                origin,
                size,
                walkable,
                radius,
            } => {
                let spec = BuildingRon {
                    origin: *origin,
                    size: *size,
                    walkable: *walkable,
                    radius: *radius,
                };
                island.place_building(spec.to_building()).map(|_| ())
            }
            WorldEvent::RemoveBuilding(id) => island.remove_building(BuildingId(*id)).map(|_| ()),
            WorldEvent::BuildRoad(tiles) => {
                let coords = tiles.iter().copied().map(Coord::from).collect();
                island.build_road(coords).map(|_| ())
            }
            WorldEvent::DestroyRoad(id) => island.destroy_road(RoadId(*id)).map(|_| ()),
            WorldEvent::SetTile { x, y, classes } => {
                island.set_tile_classes(Coord::new(*x, *y), *classes)
            }
            WorldEvent::RemoveTile { x, y } => island.remove_tile(Coord::new(*x, *y)),
        }
    }
}

/// Node-set movement caused by one replayed event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventOutcome {
    pub inserted: usize,
    pub removed: usize,
    pub walkable: usize,
    pub road_tiles: usize,
}

/// Replays `events` in order, stopping at the first one the island rejects.
pub fn replay(island: &mut Island, events: &[WorldEvent]) -> LoadResult<Vec<EventOutcome>> {
    let mut outcomes = Vec::with_capacity(events.len());

    for (index, event) in events.iter().enumerate() {
        let before = island.path_nodes().nodes().clone();

        event
            .apply(island)
            .map_err(|e| anyhow::anyhow!("Failed to apply event {index} ({event:?}): {e}"))?;

        let after = island.path_nodes().nodes();
        let outcome = EventOutcome {
            inserted: after.difference(&before).count(),
            removed: before.difference(after).count(),
            walkable: after.len(),
            road_tiles: island.road_costs().len(),
        };
        tracing::debug!(index, ?event, ?outcome, "replayed event");
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use pathing_core::{NavConfig, RegionId};

    use super::*;

    fn field() -> Island {
        Island::new(RegionId(1), 4, 4, TileClasses::GROUND, NavConfig::default())
    }

    #[test]
    fn replay_reports_node_changes_per_event() {
        let mut island = field();
        let events = vec![
            WorldEvent::PlaceBuilding {
                origin: (0, 0),
                size: (2, 2),
                walkable: false,
                radius: 0,
            },
            WorldEvent::BuildRoad(vec![(3, 0), (3, 1)]),
            WorldEvent::SetTile {
                x: 2,
                y: 3,
                classes: TileClasses::WATER,
            },
            WorldEvent::RemoveBuilding(0),
            WorldEvent::DestroyRoad(0),
        ];

        let outcomes = replay(&mut island, &events).unwrap();

        assert_eq!(outcomes[0].removed, 4);
        assert_eq!(outcomes[0].walkable, 12);
        assert_eq!(outcomes[1].road_tiles, 2);
        assert_eq!((outcomes[1].inserted, outcomes[1].removed), (0, 0));
        assert_eq!(outcomes[2].removed, 1);
        assert_eq!(outcomes[3].inserted, 4);
        assert_eq!(outcomes[4].road_tiles, 0);
        assert_eq!(island.path_nodes().len(), 15);
    }

    #[test]
    fn replay_stops_at_rejected_event() {
        let mut island = field();
        let events = vec![WorldEvent::RemoveTile { x: 1, y: 1 }, WorldEvent::DestroyRoad(7)];

        let message = replay(&mut island, &events).unwrap_err().to_string();

        assert!(message.contains("event 1"), "{message}");
        assert_eq!(island.path_nodes().len(), 15);
    }
}

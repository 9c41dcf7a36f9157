use pathing_core::{
    Building, Coord, Footprint, Island, IslandError, MoveCost, NavConfig, NavError, PathNodes,
    RadiusMetric, Region, RegionId, TileClasses, is_walkable,
};

fn coastal_island() -> Island {
    // row 0 is beach, the rest is buildable ground with a forest patch
    let mut tiles = Vec::new();
    for y in 0..5 {
        for x in 0..5 {
            let classes = match (x, y) {
                (_, 0) => TileClasses::COAST,
                (3..=4, 3..=4) => TileClasses::FOREST,
                _ => TileClasses::GROUND,
            };
            tiles.push((Coord::new(x, y), classes));
        }
    }
    Island::from_tiles(RegionId(9), 5, 5, tiles, NavConfig::default())
}

fn assert_nodes_match_terrain(island: &Island) {
    for coord in island.coords() {
        assert_eq!(
            island.path_nodes().contains(coord),
            is_walkable(island, coord),
            "node set out of date at {coord}"
        );
    }
}

#[test]
fn beach_is_excluded_and_forest_included() {
    let island = coastal_island();

    assert_eq!(island.path_nodes().len(), 20);
    assert!(!island.path_nodes().contains(Coord::new(2, 0)));
    assert!(island.path_nodes().contains(Coord::new(4, 4)));
}

#[test]
fn mixed_event_sequence_keeps_index_current() {
    let mut island = coastal_island();

    let warehouse = island
        .place_building(Building::new(Footprint::new(Coord::new(1, 1), 2, 2)))
        .unwrap();
    let road = island
        .build_road(vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(0, 3)])
        .unwrap();
    island
        .set_tile_classes(Coord::new(4, 1), TileClasses::WATER)
        .unwrap();
    assert_nodes_match_terrain(&island);

    island.remove_building(warehouse).unwrap();
    island.destroy_road(road).unwrap();
    island
        .set_tile_classes(Coord::new(4, 1), TileClasses::GROUND)
        .unwrap();

    assert_nodes_match_terrain(&island);
    assert_eq!(island.path_nodes().len(), 20);
    assert!(island.road_costs().is_empty());
}

#[test]
fn path_view_weights_roads_and_plain_ground() {
    let config = NavConfig {
        base_step_cost: 3,
        ..NavConfig::default()
    };
    let mut island = Island::new(RegionId(1), 3, 1, TileClasses::GROUND, config);
    island.build_road(vec![Coord::new(0, 0)]).unwrap();
    island.place_building(Building::new(Coord::new(2, 0))).unwrap();

    let view = island.path_view();
    assert_eq!(view.step_cost(Coord::new(0, 0)), Some(MoveCost(1)));
    assert_eq!(view.step_cost(Coord::new(1, 0)), Some(MoveCost(3)));
    assert_eq!(view.step_cost(Coord::new(2, 0)), None);
}

#[test]
fn building_on_beach_is_rejected() {
    let mut island = coastal_island();

    let err = island
        .place_building(Building::new(Coord::new(2, 0)))
        .unwrap_err();

    assert_eq!(err, IslandError::NotConstructible { coord: Coord::new(2, 0) });
    assert_eq!(err.error_code(), "ISLAND_NOT_CONSTRUCTIBLE");
}

#[test]
fn interaction_metric_comes_from_config() {
    let config = NavConfig::default().with_interaction_metric(RadiusMetric::Manhattan);
    let mut island = Island::new(RegionId(2), 9, 9, TileClasses::GROUND, config);

    let market = island
        .place_building(Building::new(Coord::new(4, 4)).with_interaction_radius(2))
        .unwrap();

    // diamond of radius 2 without its centre
    assert_eq!(island.interaction_nodes(market).map(|n| n.len()), Some(12));
}

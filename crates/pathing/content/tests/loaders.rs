use std::io::Write;
use std::path::PathBuf;

use pathing_content::{ConfigLoader, IslandLoader, replay};
use pathing_core::{Coord, MoveCost, NavConfig, PathNodes, RadiusMetric};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "road_cost = 2").unwrap();
    writeln!(file, "interaction_metric = \"euclidean\"").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();

    assert_eq!(config.road_cost, 2);
    assert_eq!(config.base_step_cost, NavConfig::DEFAULT_BASE_STEP_COST);
    assert_eq!(config.interaction_metric, RadiusMetric::Euclidean);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let message = ConfigLoader::load(&path).unwrap_err().to_string();
    assert!(message.contains("absent.toml"), "{message}");
}

#[test]
fn island_file_applies_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(id: 2, dimensions: (3, 1), roads: [[(0, 0), (1, 0)]])").unwrap();

    let config = NavConfig::default().with_road_cost(5);
    let island = IslandLoader::load(file.path(), config).unwrap();

    assert_eq!(island.road_costs().cost(Coord::new(1, 0)), Some(MoveCost(5)));
    assert_eq!(island.path_nodes().len(), 3);
}

#[test]
fn shipped_harbor_island_loads() {
    let config = ConfigLoader::load(&data_dir().join("config/nav.toml")).unwrap();
    let island = IslandLoader::load(&data_dir().join("islands/harbor.ron"), config).unwrap();

    // 80 tiles - 10 beach - 4 lagoon - 1 hole - 4 market tiles
    assert_eq!(island.path_nodes().len(), 61);
    assert!(island.path_nodes().contains(Coord::new(7, 2)));
    assert!(island.path_nodes().contains(Coord::new(8, 7)));
    assert_eq!(island.road_costs().len(), 6);

    let view = island.path_view();
    assert_eq!(view.step_cost(Coord::new(3, 5)), Some(MoveCost(1)));
    assert_eq!(view.step_cost(Coord::new(6, 6)), Some(MoveCost(2)));
}

#[test]
fn shipped_harbor_events_replay() {
    let config = ConfigLoader::load(&data_dir().join("config/nav.toml")).unwrap();
    let mut scenario =
        IslandLoader::load_scenario(&data_dir().join("islands/harbor.ron"), config).unwrap();
    assert_eq!(scenario.events.len(), 5);

    let outcomes = replay(&mut scenario.island, &scenario.events).unwrap();
    let walkable: Vec<_> = outcomes.iter().map(|outcome| outcome.walkable).collect();

    // flood, warehouse, spur road, drain, spur torn down
    assert_eq!(walkable, [60, 58, 58, 59, 59]);
    assert_eq!(outcomes[2].road_tiles, 8);
    assert_eq!(outcomes[4].road_tiles, 6);
    assert!(!scenario.island.path_nodes().contains(Coord::new(1, 6)));
    assert!(scenario.island.path_nodes().contains(Coord::new(6, 3)));
}

//! Loads an island and reports what the path search would see.
mod config;

use anyhow::Result;
use config::InspectConfig;
use pathing_content::{ConfigLoader, IslandLoader, IslandScenario};
use pathing_core::{NavConfig, PathNodes};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = InspectConfig::from_env();

    let nav_config = match &config.nav_config {
        Some(path) => ConfigLoader::load(path)?,
        None => NavConfig::default(),
    };
    tracing::info!(?nav_config, "navigation config");

    let IslandScenario {
        mut island,
        events,
    } = IslandLoader::load_scenario(&config.island, nav_config)?;
    let area = u64::from(island.width()) * u64::from(island.height());

    tracing::info!(
        island = %config.island.display(),
        area,
        walkable = island.path_nodes().len(),
        road_tiles = island.road_costs().len(),
        "island loaded"
    );

    let outcomes = pathing_content::replay(&mut island, &events)?;
    for (index, (event, outcome)) in events.iter().zip(&outcomes).enumerate() {
        tracing::info!(
            index,
            ?event,
            inserted = outcome.inserted,
            removed = outcome.removed,
            walkable = outcome.walkable,
            road_tiles = outcome.road_tiles,
            "event applied"
        );
    }

    for (id, _) in island.buildings() {
        if let Some(nodes) = island.interaction_nodes(id) {
            let reachable = nodes
                .nodes()
                .iter()
                .filter(|coord| island.path_nodes().contains(**coord))
                .count();
            tracing::info!(
                building = %id,
                interaction_nodes = nodes.len(),
                walkable = reachable,
                "interaction nodes"
            );
        }
    }

    Ok(())
}

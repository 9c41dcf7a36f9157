//! Content loaders for reading island data from files.

pub mod config;
pub mod events;
pub mod island;

pub use config::ConfigLoader;
pub use events::{EventOutcome, WorldEvent, replay};
pub use island::{IslandLoader, IslandScenario};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

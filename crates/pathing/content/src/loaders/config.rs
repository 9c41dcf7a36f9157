//! Navigation configuration loader.

use std::path::Path;

use pathing_core::NavConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for navigation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`NavConfig::default`].
    pub fn load(path: &Path) -> LoadResult<NavConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NavConfig> {
        let config: NavConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pathing_core::RadiusMetric;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("interaction_metric = \"manhattan\"\n").unwrap();

        assert_eq!(config.interaction_metric, RadiusMetric::Manhattan);
        assert_eq!(config.road_cost, NavConfig::DEFAULT_ROAD_COST);
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert!(ConfigLoader::parse("interaction_metric = \"hexagonal\"\n").is_err());
    }
}

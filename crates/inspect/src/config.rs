//! Inspector configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Files the inspector reads.
#[derive(Clone, Debug)]
pub struct InspectConfig {
    pub island: PathBuf,
    pub nav_config: Option<PathBuf>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            island: PathBuf::from("data/islands/harbor.ron"),
            nav_config: None,
        }
    }
}

impl InspectConfig {
    /// Construct configuration from process arguments and environment variables.
    ///
    /// The first argument overrides the island path. Environment variables:
    /// - `PATHING_ISLAND` - Island RON file (default: data/islands/harbor.ron)
    /// - `PATHING_CONFIG` - Navigation TOML file (default: built-in defaults)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("PATHING_ISLAND") {
            config.island = PathBuf::from(path);
        }
        if let Some(path) = env::args_os().nth(1) {
            config.island = PathBuf::from(path);
        }

        config.nav_config = env::var("PATHING_CONFIG").ok().map(PathBuf::from);

        config
    }
}

use crate::coord::RadiusMetric;

/// Tunable parameters for node sets and cost overlays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Movement cost recorded for road coordinates when a road does not
    /// override it per coordinate.
    pub road_cost: u32,
    /// Cost reported for walkable coordinates without a road.
    pub base_step_cost: u32,
    /// Metric used to expand building footprints into interaction nodes.
    pub interaction_metric: RadiusMetric,
    /// Largest interaction radius a building may ask for.
    pub max_interaction_radius: u32,
}

impl NavConfig {
    // All movement currently shares one speed; differentiated road speeds
    // override `Road::move_cost` per coordinate.
    pub const DEFAULT_ROAD_COST: u32 = 1;
    pub const DEFAULT_BASE_STEP_COST: u32 = 1;
    pub const DEFAULT_MAX_INTERACTION_RADIUS: u32 = 32;

    pub fn new() -> Self {
        Self {
            road_cost: Self::DEFAULT_ROAD_COST,
            base_step_cost: Self::DEFAULT_BASE_STEP_COST,
            interaction_metric: RadiusMetric::default(),
            max_interaction_radius: Self::DEFAULT_MAX_INTERACTION_RADIUS,
        }
    }

    pub fn with_interaction_metric(mut self, metric: RadiusMetric) -> Self {
        self.interaction_metric = metric;
        self
    }

    pub fn with_road_cost(mut self, road_cost: u32) -> Self {
        self.road_cost = road_cost;
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Planner configuration.

use crate::graph::GraphConfig;

/// Configuration parameters for trip planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// How transfer edges are generated.
    pub graph: GraphConfig,

    /// Maximum distance from a trip endpoint to its boarding or alighting
    /// stop (meters).
    pub max_stop_distance_m: f64,

    /// Access and egress walks at or below this distance are folded into the
    /// trip without their own leg (meters).
    pub min_walk_leg_m: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(graph: GraphConfig, max_stop_distance_m: f64, min_walk_leg_m: f64) -> Self {
        Self {
            graph,
            max_stop_distance_m,
            min_walk_leg_m,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            max_stop_distance_m: 1000.0,
            min_walk_leg_m: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.graph, GraphConfig::default());
        assert_eq!(config.max_stop_distance_m, 1000.0);
        assert_eq!(config.min_walk_leg_m, 50.0);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(GraphConfig::new(300.0, 1.0, "#111111"), 2000.0, 10.0);

        assert_eq!(config.graph.max_transfer_distance_m, 300.0);
        assert_eq!(config.max_stop_distance_m, 2000.0);
        assert_eq!(config.min_walk_leg_m, 10.0);
    }
}

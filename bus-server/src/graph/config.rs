//! Graph construction parameters.

/// Parameters controlling how transfer edges are generated.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Maximum distance between two stops for a walking transfer (meters).
    pub max_transfer_distance_m: f64,

    /// Fixed cost added to every walking transfer (minutes).
    pub transfer_penalty_mins: f64,

    /// Color given to routes that have none.
    pub default_route_color: String,
}

impl GraphConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_transfer_distance_m: f64,
        transfer_penalty_mins: f64,
        default_route_color: impl Into<String>,
    ) -> Self {
        Self {
            max_transfer_distance_m,
            transfer_penalty_mins,
            default_route_color: default_route_color.into(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_transfer_distance_m: 500.0,
            transfer_penalty_mins: 5.0,
            default_route_color: "#3388ff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GraphConfig::default();

        assert_eq!(config.max_transfer_distance_m, 500.0);
        assert_eq!(config.transfer_penalty_mins, 5.0);
        assert_eq!(config.default_route_color, "#3388ff");
    }

    #[test]
    fn custom_config() {
        let config = GraphConfig::new(250.0, 2.0, "#000000");

        assert_eq!(config.max_transfer_distance_m, 250.0);
        assert_eq!(config.transfer_penalty_mins, 2.0);
        assert_eq!(config.default_route_color, "#000000");
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkSnapshot;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains everything needed to handle requests. Both parts are read-only.
#[derive(Clone)]
pub struct AppState {
    /// The loaded bus network
    pub network: Arc<NetworkSnapshot>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkSnapshot, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}

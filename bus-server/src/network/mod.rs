//! Network store: the stop and route records the planner works from.
//!
//! The whole network is loaded once from a JSON file of the form
//! `{"routes": [...], "stops": [...]}` and then served read-only. Planning
//! requests take fresh copies of the records they need.

mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{RouteId, RouteRecord, StopRecord};

pub use error::NetworkError;

/// Zone name that matches every route.
pub const ALL_ZONES: &str = "all";

/// An immutable snapshot of the bus network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    routes: Vec<RouteRecord>,
    #[serde(default)]
    stops: Vec<StopRecord>,
}

impl NetworkSnapshot {
    /// Create a snapshot from records already in memory.
    pub fn new(routes: Vec<RouteRecord>, stops: Vec<StopRecord>) -> Self {
        Self { routes, stops }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: NetworkSnapshot =
            serde_json::from_str(&json).map_err(|source| NetworkError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            routes = snapshot.routes.len(),
            stops = snapshot.stops.len(),
            "Loaded bus network"
        );

        Ok(snapshot)
    }

    /// Every route, ordered by the number leading its name.
    pub fn all_routes(&self) -> Vec<RouteRecord> {
        sorted_by_sequence(self.routes.iter())
    }

    /// Look up a route by id.
    pub fn route(&self, id: RouteId) -> Option<RouteRecord> {
        self.routes.iter().find(|r| r.id == id).cloned()
    }

    /// Routes in a zone, ordered like [`all_routes`](Self::all_routes).
    ///
    /// The zone [`ALL_ZONES`] matches every route.
    pub fn routes_by_zone(&self, zone: &str) -> Vec<RouteRecord> {
        if zone == ALL_ZONES {
            return self.all_routes();
        }
        sorted_by_sequence(
            self.routes
                .iter()
                .filter(|r| r.zone.as_deref() == Some(zone)),
        )
    }

    /// Stops served by a route, in stored order.
    pub fn stops_by_route(&self, id: RouteId) -> Vec<StopRecord> {
        self.stops
            .iter()
            .filter(|s| s.route_id == id)
            .cloned()
            .collect()
    }

    /// Raw route records in stored order.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Raw stop records in stored order.
    pub fn stops(&self) -> &[StopRecord] {
        &self.stops
    }
}

fn sorted_by_sequence<'a>(routes: impl Iterator<Item = &'a RouteRecord>) -> Vec<RouteRecord> {
    let mut routes: Vec<RouteRecord> = routes.cloned().collect();
    routes.sort_by_key(RouteRecord::sequence_number);
    routes
}

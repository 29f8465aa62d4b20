//! Multimodal route graph.
//!
//! Nodes are bus stops. Edges are either rides between consecutive stops of a
//! route or walking transfers between nearby stops of different routes. A
//! graph is built from a snapshot of stop and route records for a single
//! planning request and then dropped.

mod build;
mod config;

use std::collections::HashMap;

use crate::domain::{Coordinate, RouteId, RouteRef, StopId};
use crate::geo::haversine_distance;

pub use config::GraphConfig;

/// A stop in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: StopId,
    pub coordinate: Coordinate,
    pub name: String,

    /// Routes serving this stop, in the order they were seen.
    pub route_ids: Vec<RouteId>,

    /// Set once the stop serves more than one route.
    pub is_transfer: bool,
}

impl GraphNode {
    fn new(id: StopId, coordinate: Coordinate, name: String, route_id: RouteId) -> Self {
        Self {
            id,
            coordinate,
            name,
            route_ids: vec![route_id],
            is_transfer: false,
        }
    }

    /// Record another route serving this stop.
    fn absorb_route(&mut self, route_id: RouteId) {
        if !self.route_ids.contains(&route_id) {
            self.route_ids.push(route_id);
        }
        if self.route_ids.len() > 1 {
            self.is_transfer = true;
        }
    }

    /// Returns true if the route serves this stop.
    pub fn serves(&self, route_id: RouteId) -> bool {
        self.route_ids.contains(&route_id)
    }

    /// Returns true if any route serves both stops.
    pub fn shares_route_with(&self, other: &GraphNode) -> bool {
        self.route_ids.iter().any(|r| other.serves(*r))
    }

    /// Distance to another node in meters.
    pub fn distance_to(&self, other: &GraphNode) -> f64 {
        self.distance_to_point(other.coordinate)
    }

    /// Distance to an arbitrary coordinate in meters.
    pub fn distance_to_point(&self, point: Coordinate) -> f64 {
        haversine_distance(
            self.coordinate.lat,
            self.coordinate.lon,
            point.lat,
            point.lon,
        )
    }
}

/// A directed edge between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub source: StopId,
    pub target: StopId,
    pub route: RouteRef,
    /// Traversal cost in minutes.
    pub weight: f64,
    /// Geographic length in meters.
    pub distance: f64,
}

/// The route graph for one planning request.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Nodes in first-seen order.
    nodes: Vec<GraphNode>,
    node_index: HashMap<StopId, usize>,
    edges: Vec<GraphEdge>,
    /// Outgoing edge indices per node, in edge insertion order.
    outgoing: HashMap<StopId, Vec<usize>>,
    route_names: HashMap<RouteId, String>,
    route_colors: HashMap<RouteId, String>,
}

impl RouteGraph {
    /// Look up a node by stop id.
    pub fn node(&self, id: StopId) -> Option<&GraphNode> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn neighbors(&self, id: StopId) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.outgoing
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&i| &self.edges[i])
    }

    /// Display name of a route.
    pub fn route_name(&self, id: RouteId) -> Option<&str> {
        self.route_names.get(&id).map(String::as_str)
    }

    /// Display color of a route.
    pub fn route_color(&self, id: RouteId) -> Option<&str> {
        self.route_colors.get(&id).map(String::as_str)
    }

    /// Find the node closest to a coordinate within `max_distance_m`.
    ///
    /// Linear scan; on equal distance the node seen first wins.
    pub fn find_nearest_node(&self, point: Coordinate, max_distance_m: f64) -> Option<&GraphNode> {
        let mut nearest = None;
        let mut best = f64::INFINITY;

        for node in &self.nodes {
            let distance = node.distance_to_point(point);
            if distance < best && distance <= max_distance_m {
                best = distance;
                nearest = Some(node);
            }
        }

        nearest
    }

    fn push_edge(&mut self, edge: GraphEdge) {
        let index = self.edges.len();
        self.outgoing.entry(edge.source).or_default().push(index);
        self.edges.push(edge);
    }
}

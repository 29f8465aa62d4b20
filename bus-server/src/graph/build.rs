//! Graph construction from stop and route records.

use std::cmp::Ordering;

use tracing::{debug, warn};

use super::{GraphConfig, GraphEdge, GraphNode, RouteGraph};
use crate::domain::{RouteRecord, RouteRef, StopRecord};
use crate::geo::{estimate_travel_time, estimate_walking_time};

impl RouteGraph {
    /// Build a graph with the default transfer parameters.
    pub fn build(stops: &[StopRecord], routes: &[RouteRecord]) -> Self {
        Self::build_with(stops, routes, &GraphConfig::default())
    }

    /// Build a graph from a snapshot of stops and routes.
    ///
    /// Stops whose coordinates are not numeric are left out of the graph, and
    /// any route segment touching them is skipped. Malformed rows never fail
    /// the build.
    pub fn build_with(stops: &[StopRecord], routes: &[RouteRecord], config: &GraphConfig) -> Self {
        let mut graph = RouteGraph::default();

        for route in routes {
            let color = route
                .color
                .clone()
                .unwrap_or_else(|| config.default_route_color.clone());
            graph.route_colors.insert(route.id, color);
            graph.route_names.insert(route.id, route.name.clone());
        }

        graph.add_nodes(stops);
        graph.add_route_edges(stops, routes);
        graph.add_transfer_edges(config);

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built route graph"
        );

        graph
    }

    fn add_nodes(&mut self, stops: &[StopRecord]) {
        for stop in stops {
            let Some(coordinate) = stop.coordinate() else {
                warn!(
                    stop_id = %stop.id,
                    name = %stop.name,
                    "Skipping stop with invalid coordinates"
                );
                continue;
            };

            match self.node_index.get(&stop.id) {
                Some(&i) => self.nodes[i].absorb_route(stop.route_id),
                None => {
                    self.node_index.insert(stop.id, self.nodes.len());
                    self.nodes.push(GraphNode::new(
                        stop.id,
                        coordinate,
                        stop.name.clone(),
                        stop.route_id,
                    ));
                }
            }
        }
    }

    fn add_route_edges(&mut self, stops: &[StopRecord], routes: &[RouteRecord]) {
        for route in routes {
            let mut route_stops: Vec<&StopRecord> =
                stops.iter().filter(|s| s.route_id == route.id).collect();
            sort_route_stops(&mut route_stops);

            for pair in route_stops.windows(2) {
                let (Some(source), Some(target)) = (self.node(pair[0].id), self.node(pair[1].id))
                else {
                    continue;
                };

                let distance = source.distance_to(target);
                let edge = GraphEdge {
                    source: source.id,
                    target: target.id,
                    route: RouteRef::Route(route.id),
                    weight: estimate_travel_time(distance),
                    distance,
                };
                self.push_edge(edge);
            }
        }
    }

    /// Connect every pair of nearby stops that share no route.
    ///
    /// Exhaustive over all node pairs, so quadratic in the number of stops.
    fn add_transfer_edges(&mut self, config: &GraphConfig) {
        let mut transfers = Vec::new();

        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                if a.shares_route_with(b) {
                    continue;
                }

                let distance = a.distance_to(b);
                if distance > config.max_transfer_distance_m {
                    continue;
                }

                let weight = estimate_walking_time(distance) + config.transfer_penalty_mins;
                transfers.push(GraphEdge {
                    source: a.id,
                    target: b.id,
                    route: RouteRef::Walking,
                    weight,
                    distance,
                });
                transfers.push(GraphEdge {
                    source: b.id,
                    target: a.id,
                    route: RouteRef::Walking,
                    weight,
                    distance,
                });
            }
        }

        for edge in transfers {
            self.push_edge(edge);
        }
    }
}

/// Order used for stops along a route.
///
/// Two stops that both carry a sequence order compare by it; otherwise they
/// compare by stop id.
fn compare_route_stops(a: &StopRecord, b: &StopRecord) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.id.cmp(&b.id),
    }
}

/// Stable insertion sort with [`compare_route_stops`].
///
/// The comparison is not a total order when only some stops carry a sequence
/// order, which `slice::sort_by` does not accept.
fn sort_route_stops(stops: &mut [&StopRecord]) {
    for i in 1..stops.len() {
        let mut j = i;
        while j > 0 && compare_route_stops(stops[j - 1], stops[j]) == Ordering::Greater {
            stops.swap(j - 1, j);
            j -= 1;
        }
    }
}

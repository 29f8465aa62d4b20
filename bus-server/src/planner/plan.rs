//! Trip planning from coordinate to coordinate.
//!
//! Each call builds its own graph from the supplied snapshot, finds the stops
//! nearest to the two coordinates, searches between them and wraps the result
//! with walking legs to and from the literal coordinates.

use std::fmt;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Coordinate, RouteRecord, StopId, StopRecord, minutes_to_duration};
use crate::geo::estimate_walking_time;
use crate::graph::{GraphNode, RouteGraph};

use super::astar::find_path;
use super::config::PlannerConfig;
use super::itinerary::{Itinerary, Leg, LegEndpoint, add_minutes, assemble};

/// Which end of the trip an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from trip planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No stop lies within the search radius of a trip endpoint
    #[error("no stop within {radius_m} m of the {endpoint}")]
    NoNearbyStop { endpoint: Endpoint, radius_m: f64 },

    /// The network has no path between the two stops
    #[error("no path from stop {from} to stop {to}")]
    NoPath { from: StopId, to: StopId },
}

/// Request for trip planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,

    /// When the rider wants to be boarding at the first stop.
    pub start_time: NaiveDateTime,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(origin: Coordinate, destination: Coordinate, start_time: NaiveDateTime) -> Self {
        Self {
            origin,
            destination,
            start_time,
        }
    }
}

/// Straight-line walk between a coordinate and a stop.
struct AccessWalk<'g> {
    stop: &'g GraphNode,
    distance_m: f64,
    minutes: f64,
}

impl<'g> AccessWalk<'g> {
    fn to_stop(point: Coordinate, stop: &'g GraphNode) -> Self {
        let distance_m = stop.distance_to_point(point);
        Self {
            stop,
            distance_m,
            minutes: estimate_walking_time(distance_m),
        }
    }
}

/// Plan a trip between two coordinates.
///
/// Returns a list holding one itinerary. The list shape leaves room for
/// alternatives.
pub fn plan_route(
    request: &PlanRequest,
    stops: &[StopRecord],
    routes: &[RouteRecord],
    config: &PlannerConfig,
) -> Result<Vec<Itinerary>, PlanError> {
    let graph = RouteGraph::build_with(stops, routes, &config.graph);

    let origin_stop = nearest_stop(&graph, request.origin, Endpoint::Origin, config)?;
    let destination_stop =
        nearest_stop(&graph, request.destination, Endpoint::Destination, config)?;

    debug!(
        origin = %origin_stop.id,
        origin_name = %origin_stop.name,
        destination = %destination_stop.id,
        destination_name = %destination_stop.name,
        "Located endpoint stops"
    );

    let access = AccessWalk::to_stop(request.origin, origin_stop);
    let egress = AccessWalk::to_stop(request.destination, destination_stop);

    let path = find_path(&graph, origin_stop.id, destination_stop.id).ok_or(PlanError::NoPath {
        from: origin_stop.id,
        to: destination_stop.id,
    })?;

    debug!(
        stops = path.nodes.len(),
        edges = path.edges.len(),
        transfers = path.edges.iter().filter(|e| e.route.is_walking()).count(),
        cost_mins = path.cost(),
        "Found path"
    );

    // The rider leaves the literal origin before reaching the first stop
    let departure = request.start_time - minutes_to_duration(access.minutes);
    let mut itinerary = assemble(&path, &graph, departure);

    if access.distance_m > config.min_walk_leg_m {
        let leg = Leg::walk(
            LegEndpoint::origin(request.origin),
            LegEndpoint::at_stop(access.stop),
            access.minutes,
            access.distance_m,
        );
        itinerary.legs.insert(0, leg);
    }

    if egress.distance_m > config.min_walk_leg_m {
        itinerary.legs.push(Leg::walk(
            LegEndpoint::at_stop(egress.stop),
            LegEndpoint::destination(request.destination),
            egress.minutes,
            egress.distance_m,
        ));
    }

    // Totals come from the rounded per-leg minutes
    itinerary.duration_mins = itinerary.leg_minutes();
    itinerary.end = add_minutes(itinerary.start, itinerary.duration_mins);

    debug!(
        legs = itinerary.legs.len(),
        duration_mins = itinerary.duration_mins,
        "Assembled itinerary"
    );

    Ok(vec![itinerary])
}

fn nearest_stop<'g>(
    graph: &'g RouteGraph,
    point: Coordinate,
    endpoint: Endpoint,
    config: &PlannerConfig,
) -> Result<&'g GraphNode, PlanError> {
    graph
        .find_nearest_node(point, config.max_stop_distance_m)
        .ok_or(PlanError::NoNearbyStop {
            endpoint,
            radius_m: config.max_stop_distance_m,
        })
}

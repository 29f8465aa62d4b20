//! Itinerary assembly.
//!
//! Turns a raw search path into legs a rider can follow: consecutive edges on
//! the same route (or consecutive walking transfers) collapse into one leg.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Coordinate, RouteId, StopRef, minutes_to_duration};
use crate::graph::{GraphEdge, GraphNode, RouteGraph};

use super::astar::PathResult;

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegMode {
    Walk,
    Bus,
}

/// One end of a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegEndpoint {
    pub stop_ref: StopRef,
    pub name: String,
    pub coordinate: Coordinate,
}

impl LegEndpoint {
    /// Endpoint at a stop in the graph.
    pub fn at_stop(node: &GraphNode) -> Self {
        Self {
            stop_ref: StopRef::Stop(node.id),
            name: node.name.clone(),
            coordinate: node.coordinate,
        }
    }

    /// Endpoint at the literal trip origin.
    pub fn origin(coordinate: Coordinate) -> Self {
        Self {
            stop_ref: StopRef::Origin,
            name: "Origin point".to_string(),
            coordinate,
        }
    }

    /// Endpoint at the literal trip destination.
    pub fn destination(coordinate: Coordinate) -> Self {
        Self {
            stop_ref: StopRef::Destination,
            name: "Destination point".to_string(),
            coordinate,
        }
    }
}

/// Route details shown on a bus leg.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRoute {
    pub id: RouteId,
    pub name: Option<String>,
    pub color: Option<String>,
}

/// A single-mode stretch of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub mode: LegMode,
    /// Present on bus legs only.
    pub route: Option<LegRoute>,
    pub from: LegEndpoint,
    pub to: LegEndpoint,
    /// Whole minutes, rounded when the leg is created.
    pub duration_mins: i64,
    pub distance_m: f64,
}

impl Leg {
    /// A walking leg between two endpoints.
    pub fn walk(from: LegEndpoint, to: LegEndpoint, minutes: f64, distance_m: f64) -> Self {
        Self {
            mode: LegMode::Walk,
            route: None,
            from,
            to,
            duration_mins: round_minutes(minutes),
            distance_m,
        }
    }

    /// Duration as shown to riders, e.g. "12 min".
    pub fn duration_label(&self) -> String {
        format_minutes(self.duration_mins)
    }

    /// Distance as shown to riders, e.g. "1.4 km".
    ///
    /// Tenths of a kilometer are rounded half up, so 250 m reads "0.3 km".
    pub fn distance_label(&self) -> String {
        let km = (self.distance_m / 100.0).round() / 10.0;
        format!("{km:.1} km")
    }
}

/// A door-to-door trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: u32,
    pub duration_mins: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Total duration as shown to riders.
    pub fn duration_label(&self) -> String {
        format_minutes(self.duration_mins)
    }

    /// Sum of the per-leg whole minutes.
    pub fn leg_minutes(&self) -> i64 {
        self.legs.iter().map(|leg| leg.duration_mins).sum()
    }
}

/// Format whole minutes as "<n> min".
pub fn format_minutes(minutes: i64) -> String {
    format!("{minutes} min")
}

/// Parse a "<n> min" label back to whole minutes.
pub fn parse_minutes(label: &str) -> Option<i64> {
    label.strip_suffix(" min")?.parse().ok()
}

/// Round fractional minutes to the nearest whole minute.
pub fn round_minutes(minutes: f64) -> i64 {
    minutes.round() as i64
}

/// Build an itinerary from a search path.
///
/// `start` is when the rider boards at the first stop; the end time adds the
/// unrounded path cost.
pub fn assemble(path: &PathResult<'_>, graph: &RouteGraph, start: NaiveDateTime) -> Itinerary {
    let total = path.cost();
    let end = start + minutes_to_duration(total);

    let mut legs = Vec::new();
    for group in path.edges.chunk_by(|a, b| a.route == b.route) {
        if let Some(leg) = leg_from_edges(group, graph) {
            legs.push(leg);
        }
    }

    Itinerary {
        id: 1,
        duration_mins: round_minutes(total),
        start,
        end,
        legs,
    }
}

/// Collapse a run of same-route edges into one leg.
fn leg_from_edges(edges: &[&GraphEdge], graph: &RouteGraph) -> Option<Leg> {
    let first = edges.first()?;
    let last = edges.last()?;
    let from = graph.node(first.source)?;
    let to = graph.node(last.target)?;

    let minutes: f64 = edges.iter().map(|e| e.weight).sum();
    let distance_m: f64 = edges.iter().map(|e| e.distance).sum();

    let (mode, route) = match first.route.route_id() {
        None => (LegMode::Walk, None),
        Some(id) => (
            LegMode::Bus,
            Some(LegRoute {
                id,
                name: graph.route_name(id).map(str::to_string),
                color: graph.route_color(id).map(str::to_string),
            }),
        ),
    };

    Some(Leg {
        mode,
        route,
        from: LegEndpoint::at_stop(from),
        to: LegEndpoint::at_stop(to),
        duration_mins: round_minutes(minutes),
        distance_m,
    })
}

/// Shift a time by whole minutes.
pub(crate) fn add_minutes(time: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    time + Duration::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteRecord, StopId, StopRecord, format_clock};
    use crate::planner::astar::find_path;
    use chrono::NaiveDate;

    fn stop(id: i64, route: i64, lat: f64, lon: f64) -> StopRecord {
        StopRecord::new(
            StopId(id),
            RouteId(route),
            format!("Stop {id}"),
            lat.to_string(),
            lon.to_string(),
        )
    }

    fn route(id: i64) -> RouteRecord {
        RouteRecord::new(RouteId(id), format!("{id}. Route"))
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    /// Route 1 east along the equator, a short walk north, then route 2 east.
    fn transfer_graph() -> RouteGraph {
        let stops = vec![
            stop(1, 1, 0.0, 0.0),
            stop(2, 1, 0.0, 0.01),
            stop(3, 1, 0.0, 0.02),
            stop(4, 2, 0.001, 0.02),
            stop(5, 2, 0.001, 0.03),
        ];
        let routes = vec![route(1).with_color("#e4007c"), route(2)];
        RouteGraph::build(&stops, &routes)
    }

    #[test]
    fn merges_same_route_edges() {
        let graph = transfer_graph();
        let path = find_path(&graph, StopId(1), StopId(3)).unwrap();
        let itinerary = assemble(&path, &graph, at(8, 0));

        assert_eq!(itinerary.legs.len(), 1);
        let leg = &itinerary.legs[0];
        assert_eq!(leg.mode, LegMode::Bus);
        assert_eq!(leg.from.stop_ref, StopRef::Stop(StopId(1)));
        assert_eq!(leg.to.stop_ref, StopRef::Stop(StopId(3)));
        assert_eq!(leg.distance_label(), "2.2 km");
        // 2.224 km at 20 km/h
        assert_eq!(leg.duration_label(), "7 min");
    }

    #[test]
    fn bus_walk_bus() {
        let graph = transfer_graph();
        let path = find_path(&graph, StopId(1), StopId(5)).unwrap();
        let itinerary = assemble(&path, &graph, at(8, 0));

        let modes: Vec<_> = itinerary.legs.iter().map(|l| l.mode).collect();
        assert_eq!(modes, vec![LegMode::Bus, LegMode::Walk, LegMode::Bus]);

        let first = itinerary.legs[0].route.as_ref().unwrap();
        assert_eq!(first.id, RouteId(1));
        assert_eq!(first.name.as_deref(), Some("1. Route"));
        assert_eq!(first.color.as_deref(), Some("#e4007c"));

        let walk = &itinerary.legs[1];
        assert!(walk.route.is_none());
        assert_eq!(walk.from.stop_ref, StopRef::Stop(StopId(3)));
        assert_eq!(walk.to.stop_ref, StopRef::Stop(StopId(4)));
        assert_eq!(walk.distance_label(), "0.1 km");
        // 111 m walk plus the 5 minute penalty
        assert_eq!(walk.duration_mins, 6);

        let last = itinerary.legs[2].route.as_ref().unwrap();
        assert_eq!(last.color.as_deref(), Some("#3388ff"));
    }

    #[test]
    fn clock_strings() {
        let graph = transfer_graph();
        let path = find_path(&graph, StopId(1), StopId(3)).unwrap();
        let itinerary = assemble(&path, &graph, at(23, 58));

        assert_eq!(format_clock(itinerary.start), "23:58");
        // 6.67 minutes later, past midnight
        assert_eq!(format_clock(itinerary.end), "00:04");
    }

    #[test]
    fn empty_path_has_no_legs() {
        let graph = transfer_graph();
        let path = find_path(&graph, StopId(2), StopId(2)).unwrap();
        let itinerary = assemble(&path, &graph, at(9, 0));

        assert!(itinerary.legs.is_empty());
        assert_eq!(itinerary.duration_mins, 0);
        assert_eq!(itinerary.start, itinerary.end);
    }

    #[test]
    fn walk_leg_constructor() {
        let leg = Leg::walk(
            LegEndpoint::origin(Coordinate::new(0.0, 0.0)),
            LegEndpoint::destination(Coordinate::new(0.0, 0.01)),
            13.4,
            1111.95,
        );

        assert_eq!(leg.mode, LegMode::Walk);
        assert_eq!(leg.duration_label(), "13 min");
        assert_eq!(leg.distance_label(), "1.1 km");
        assert_eq!(leg.from.name, "Origin point");
        assert_eq!(leg.to.name, "Destination point");
    }

    #[test]
    fn distance_label_rounds_halves_up() {
        let walk = |meters| {
            Leg::walk(
                LegEndpoint::origin(Coordinate::new(0.0, 0.0)),
                LegEndpoint::destination(Coordinate::new(0.0, 0.0)),
                0.0,
                meters,
            )
        };

        assert_eq!(walk(250.0).distance_label(), "0.3 km");
        assert_eq!(walk(1450.0).distance_label(), "1.5 km");
        assert_eq!(walk(1449.0).distance_label(), "1.4 km");
        assert_eq!(walk(0.0).distance_label(), "0.0 km");
        assert_eq!(walk(49.0).distance_label(), "0.0 km");
    }

    #[test]
    fn minute_labels() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(42), "42 min");
        assert_eq!(parse_minutes("42 min"), Some(42));
        assert_eq!(parse_minutes("42"), None);
        assert_eq!(parse_minutes("x min"), None);
    }

    #[test]
    fn rounding_half_up() {
        assert_eq!(round_minutes(2.5), 3);
        assert_eq!(round_minutes(2.49), 2);
        assert_eq!(round_minutes(0.0), 0);
    }
}

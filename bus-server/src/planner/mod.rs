//! Trip planner.
//!
//! Answers: "how do I get from this point to that point by bus?"
//!
//! A request builds a route graph from the current network snapshot, runs an
//! A* search between the stops nearest to the two points, and assembles the
//! resulting path into walk and bus legs.

mod astar;
mod config;
mod itinerary;
mod plan;


pub use astar::{PathResult, find_path};
pub use config::PlannerConfig;
pub use itinerary::{
    Itinerary, Leg, LegEndpoint, LegMode, LegRoute, assemble, format_minutes, parse_minutes,
    round_minutes,
};
pub use plan::{Endpoint, PlanError, PlanRequest, plan_route};

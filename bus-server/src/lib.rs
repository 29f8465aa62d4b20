//! City bus trip planner server.
//!
//! Answers "how do I get from here to there by bus?": builds a graph of stops
//! from the network snapshot, searches it with A*, and returns an itinerary
//! of walking and bus legs.

pub mod config;
pub mod domain;
pub mod geo;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, StopRef, format_clock};
use crate::planner::{Itinerary, Leg, LegEndpoint, LegMode};

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTripRequest {
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub destination_lat: f64,
    pub destination_lng: f64,

    /// Time in HH:MM format (defaults to now)
    pub start_time: Option<String>,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Found itineraries, best first
    pub itineraries: Vec<ItineraryResult>,
}

/// An itinerary option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    pub id: u32,

    /// Total duration, e.g. "23 min"
    pub duration: String,

    /// Departure from the origin point, "HH:MM"
    pub start_time: String,

    /// Arrival at the destination point, "HH:MM"
    pub end_time: String,

    pub legs: Vec<LegResult>,
}

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegType {
    Walk,
    Bus,
}

/// A leg of an itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    #[serde(rename = "type")]
    pub leg_type: LegType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<RouteId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_color: Option<String>,

    pub from: EndpointResult,
    pub to: EndpointResult,

    /// Duration, e.g. "7 min"
    pub duration: String,

    /// Distance, e.g. "2.3 km"
    pub distance: String,
}

/// One end of a leg.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResult {
    pub stop_ref: StopRef,
    pub name: String,

    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id,
            duration: itinerary.duration_label(),
            start_time: format_clock(itinerary.start),
            end_time: format_clock(itinerary.end),
            legs: itinerary.legs.iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        let leg_type = match leg.mode {
            LegMode::Walk => LegType::Walk,
            LegMode::Bus => LegType::Bus,
        };
        let route = leg.route.as_ref();

        Self {
            leg_type,
            route_id: route.map(|r| r.id),
            route_name: route.and_then(|r| r.name.clone()),
            route_color: route.and_then(|r| r.color.clone()),
            from: EndpointResult::from_endpoint(&leg.from),
            to: EndpointResult::from_endpoint(&leg.to),
            duration: leg.duration_label(),
            distance: leg.distance_label(),
        }
    }
}

impl EndpointResult {
    fn from_endpoint(endpoint: &LegEndpoint) -> Self {
        Self {
            stop_ref: endpoint.stop_ref,
            name: endpoint.name.clone(),
            coordinates: endpoint.coordinate.lon_lat(),
        }
    }
}

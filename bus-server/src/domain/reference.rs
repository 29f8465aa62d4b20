//! Route and stop references.
//!
//! A graph edge either belongs to a real route or is a walk between stops,
//! and a leg endpoint is either a real stop or one of the literal trip
//! endpoints. Both cases are modelled as enums so that a walking edge or a
//! literal endpoint can never collide with a real id.

use serde::{Deserialize, Serialize};

use super::{RouteId, StopId};

/// What an edge travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteRef {
    /// Riding a bus on this route.
    Route(RouteId),
    /// Walking between stops of different routes.
    Walking,
}

impl RouteRef {
    /// Returns the route id, or `None` for a walk.
    pub fn route_id(&self) -> Option<RouteId> {
        match self {
            RouteRef::Route(id) => Some(*id),
            RouteRef::Walking => None,
        }
    }

    /// Returns true if this is a walking reference.
    pub fn is_walking(&self) -> bool {
        matches!(self, RouteRef::Walking)
    }
}

/// One end of an itinerary leg.
///
/// Serialized as `{"stop": <id>}`, `"origin"` or `"destination"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRef {
    /// A stop in the network.
    Stop(StopId),
    /// The literal coordinate the trip starts from.
    Origin,
    /// The literal coordinate the trip ends at.
    Destination,
}

//! Domain types for the bus trip planner.
//!
//! Identifiers, input records from the network store, and the reference
//! enums used on graph edges and itinerary legs.

mod clock;
mod coordinate;
mod ids;
mod records;
mod reference;

pub use clock::{ClockError, format_clock, minutes_to_duration, parse_clock};
pub use coordinate::Coordinate;
pub use ids::{RouteId, StopId};
pub use records::{RouteRecord, StopRecord};
pub use reference::{RouteRef, StopRef};

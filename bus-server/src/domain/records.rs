//! Stop and route records as supplied by the network store.
//!
//! Records are plain data: coordinates arrive as decimal strings and are only
//! validated when the graph is built.

use serde::{Deserialize, Serialize};

use super::{Coordinate, RouteId, StopId};

/// A bus stop row. Each row belongs to exactly one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopRecord {
    pub id: StopId,
    pub route_id: RouteId,
    pub name: String,
    pub latitude: String,
    pub longitude: String,

    /// Position of the stop along its route, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(default)]
    pub is_terminal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_type: Option<String>,
}

impl StopRecord {
    /// Create a stop record with no sequence order.
    pub fn new(
        id: StopId,
        route_id: RouteId,
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            id,
            route_id,
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            order: None,
            is_terminal: false,
            terminal_type: None,
        }
    }

    /// Set the sequence order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Parse the decimal coordinate strings.
    ///
    /// Returns `None` unless both values parse to finite numbers.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = parse_degrees(&self.latitude)?;
        let lon = parse_degrees(&self.longitude)?;
        Some(Coordinate::new(lat, lon))
    }
}

fn parse_degrees(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A bus route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: RouteId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Display color, e.g. `#e4007c`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// Service frequency as published, e.g. "10-15 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// First departure of the day, e.g. "05:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_start: Option<String>,

    /// Last departure of the day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops_count: Option<i64>,

    /// Published end-to-end trip time, e.g. "45 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,

    /// Route geometry as a GeoJSON object, passed through untouched.
    #[serde(
        rename = "geoJSON",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub geo_json: Option<serde_json::Value>,
}

impl RouteRecord {
    /// Create a route record with only an id and a name.
    pub fn new(id: RouteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
            color: None,
            zone: None,
            frequency: None,
            schedule_start: None,
            schedule_end: None,
            stops_count: None,
            approximate_time: None,
            popular: None,
            geo_json: None,
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the zone.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Leading sequence number of the route name ("12. Centro" -> 12).
    ///
    /// Only the digits at the start of the text before the first `.` count,
    /// so "12 Centro" is 12 as well. Names without a numeric prefix sort as 0.
    pub fn sequence_number(&self) -> i64 {
        let prefix = self.name.split('.').next().unwrap_or_default().trim_start();
        let (sign, rest) = match prefix.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, prefix.strip_prefix('+').unwrap_or(prefix)),
        };
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        rest[..digits].parse::<i64>().map_or(0, |n| sign * n)
    }
}

//! Distance and travel-time estimates.
//!
//! All functions are pure. Distances are in meters, times in minutes.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average bus speed, km/h.
pub const BUS_SPEED_KMH: f64 = 20.0;

/// Average walking speed, km/h.
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Optimistic speed used by the search heuristic, km/h.
///
/// Faster than any edge in the graph.
pub const HEURISTIC_SPEED_KMH: f64 = 40.0;

/// Great-circle distance between two points, in meters.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

/// Minutes needed to cover `meters` at `speed_kmh`.
fn minutes_at(meters: f64, speed_kmh: f64) -> f64 {
    meters / 1000.0 / speed_kmh * 60.0
}

/// Estimated bus travel time over a distance.
pub fn estimate_travel_time(meters: f64) -> f64 {
    minutes_at(meters, BUS_SPEED_KMH)
}

/// Estimated walking time over a distance.
pub fn estimate_walking_time(meters: f64) -> f64 {
    minutes_at(meters, WALKING_SPEED_KMH)
}

/// Lower-bound travel time used by the A* heuristic.
pub fn heuristic_time(meters: f64) -> f64 {
    minutes_at(meters, HEURISTIC_SPEED_KMH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_are_zero() {
        assert_eq!(haversine_distance(19.43, -99.13, 19.43, -99.13), 0.0);
    }

    #[test]
    fn one_millidegree_of_longitude_at_equator() {
        // 2 * pi * 6371 km / 360 / 1000 = 111.19 m
        let d = haversine_distance(0.0, 0.0, 0.0, 0.001);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn known_city_distance() {
        // Zócalo to Ángel de la Independencia, roughly 3.3 km
        let d = haversine_distance(19.4326, -99.1332, 19.4270, -99.1677);
        assert!((3000.0..3800.0).contains(&d), "got {d}");
    }

    #[test]
    fn travel_times() {
        // 1 km at 20 km/h is 3 minutes, at 5 km/h is 12, at 40 km/h is 1.5
        assert!((estimate_travel_time(1000.0) - 3.0).abs() < 1e-9);
        assert!((estimate_walking_time(1000.0) - 12.0).abs() < 1e-9);
        assert!((heuristic_time(1000.0) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_takes_no_time() {
        assert_eq!(estimate_travel_time(0.0), 0.0);
        assert_eq!(estimate_walking_time(0.0), 0.0);
    }
}

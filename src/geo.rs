//! Great-circle distance and travel time.

use crate::record::LocationRecord;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two locations in kilometres.
pub fn distance_km(a: &LocationRecord, b: &LocationRecord) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = lat_b - lat_a;
    let delta_lon = b.longitude().to_radians() - a.longitude().to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Hours needed to cover `distance_km` at `speed_kmh`. Stored speeds are
/// always positive.
pub fn duration_hours(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh
}

/// Split fractional hours into whole hours and rounded minutes.
pub fn hours_minutes(hours: f64) -> (u64, u64) {
    let total_minutes = (hours * 60.0).round() as u64;
    (total_minutes / 60, total_minutes % 60)
}

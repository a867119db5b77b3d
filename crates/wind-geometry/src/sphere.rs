//! Great-circle primitives on a spherical Earth.

use std::f64::consts::PI;

/// Earth mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Destination point reached by traveling `distance_km` along a great
/// circle from `(lon, lat)` at the given bearing.
///
/// Bearing is degrees clockwise from north (0° = north, 90° = east).
/// Returns `(lon, lat)` in degrees. Pure; no error conditions for finite
/// input.
pub fn destination_point(lon: f64, lat: f64, distance_km: f64, bearing_deg: f64) -> (f64, f64) {
    let to_rad = PI / 180.0;
    let to_deg = 180.0 / PI;

    let lat1 = lat * to_rad;
    let lon1 = lon * to_rad;
    let bearing = bearing_deg * to_rad;
    let angular = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();

    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    (lon2 * to_deg, lat2 * to_deg)
}

/// Haversine great-circle distance between two lon/lat points, in km.
///
/// The inverse of [`destination_point`] over distance, on the same
/// 6371 km sphere.
pub fn great_circle_distance_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let to_rad = PI / 180.0;

    let phi1 = lat1 * to_rad;
    let phi2 = lat2 * to_rad;
    let dphi = (lat2 - lat1) * to_rad;
    let dlambda = (lon2 - lon1) * to_rad;

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

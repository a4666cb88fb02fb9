//! Fixed-point coordinate helpers and great-circle distance.
//!
//! Coordinates travel over the wire as E7 fixed-point integers (degrees
//! multiplied by 10^7). All geometry in the service is derived from these
//! two primitives so every component agrees on the conversion and on the
//! rounding behavior of distances.

use crate::proto::Point;

/// Scale factor between E7 fixed-point integers and decimal degrees.
pub const COORD_FACTOR: f64 = 1e7;

/// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Latitude of `point` in decimal degrees.
pub fn latitude(point: &Point) -> f64 {
    f64::from(point.latitude) / COORD_FACTOR
}

/// Longitude of `point` in decimal degrees.
pub fn longitude(point: &Point) -> f64 {
    f64::from(point.longitude) / COORD_FACTOR
}

/// Great-circle distance between two points in meters.
///
/// Haversine formula on a sphere of radius 6,371,000 m. The floating-point
/// result is truncated to an integer number of meters, matching the wire
/// contract of `RouteSummary.distance`.
pub fn distance_meters(start: &Point, end: &Point) -> i32 {
    let lat1 = latitude(start).to_radians();
    let lat2 = latitude(end).to_radians();
    let lon1 = longitude(start).to_radians();
    let lon2 = longitude(end).to_radians();

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_M * c) as i32
}

//! Distances, interpolation and navigation on a spherical Earth.
//!
//! All functions accept and return degrees, work in radians internally and use the
//! [`Datum::WGS84`] radius. None of them panic: invalid input produces an infinite distance or
//! NaN coordinates.

use crate::geo::datum::Datum;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Equirectangular approximation of the distance between two points in meters.
///
/// Returns [`f64::INFINITY`] if either point is invalid, so unreliable locations are treated as
/// maximally far away. The approximation is good at city and regional scale; use
/// [`great_circle_distance`] for long distances.
pub fn distance(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> f64 {
    if !a.is_valid() || !b.is_valid() {
        return f64::INFINITY;
    }

    let x = (b.lon_rad() - a.lon_rad()) * ((a.lat_rad() + b.lat_rad()) / 2.0).cos();
    let y = b.lat_rad() - a.lat_rad();

    (x * x + y * y).sqrt() * Datum::WGS84.semimajor()
}

/// Central angle between two points in radians (haversine formula).
pub fn angular_distance(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> f64 {
    let d_lat = b.lat_rad() - a.lat_rad();
    let d_lon = b.lon_rad() - a.lon_rad();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat_rad().cos() * b.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * h.sqrt().min(1.0).asin()
}

/// Great circle distance between two points in meters.
///
/// Returns [`f64::INFINITY`] if either point is invalid.
pub fn great_circle_distance(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> f64 {
    if !a.is_valid() || !b.is_valid() {
        return f64::INFINITY;
    }

    angular_distance(a, b) * Datum::WGS84.semimajor()
}

/// Returns the point that lies the given `fraction` of the way from `from` to `to` along the great
/// circle through them. Longitude of the result is in `[-180, 180)`, so an endpoint at longitude
/// 180 comes back at -180 and is not `==` to the input point.
///
/// `fraction` of 0 gives `from` and 1 gives `to`; values outside `[0, 1]` extrapolate along the
/// same great circle.
///
/// Coincident (or antipodal) endpoints do not define a great circle: the result is then
/// [`GeoPoint2d::INVALID`]-like, with NaN in both coordinates.
pub fn interpolate(
    from: &impl GeoPoint<Num = f64>,
    to: &impl GeoPoint<Num = f64>,
    fraction: f64,
) -> GeoPoint2d {
    let (lat1, lon1) = (from.lat_rad(), from.lon_rad());
    let (lat2, lon2) = (to.lat_rad(), to.lon_rad());

    let delta = angular_distance(from, to);
    let a = ((1.0 - fraction) * delta).sin() / delta.sin();
    let b = (fraction * delta).sin() / delta.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);

    GeoPoint2d::latlon(lat.to_degrees(), wrap_longitude(lon.to_degrees()))
}

/// Initial heading (degrees clockwise from North) at `from` of the great circle path to `to`.
///
/// The result is in `[0, 360)`. Coincident points give 0.
pub fn heading(from: &impl GeoPoint<Num = f64>, to: &impl GeoPoint<Num = f64>) -> f64 {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let d_lon = to.lon_rad() - from.lon_rad();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);

    // rem_euclid can round up to exactly 360 for tiny negative bearings.
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Returns the destination after travelling `distance` meters from `from` along the great circle
/// with initial `heading` (degrees clockwise from North). Longitude of the result is in
/// `[-180, 180)`.
pub fn offset(from: &impl GeoPoint<Num = f64>, distance: f64, heading: f64) -> GeoPoint2d {
    let delta = distance / Datum::WGS84.semimajor();
    let theta = heading.to_radians();

    let lat1 = from.lat_rad();
    let lon1 = from.lon_rad();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let x = delta.cos() - lat1.sin() * lat2.sin();
    let y = theta.sin() * delta.sin() * lat1.cos();
    let lon2 = lon1 + y.atan2(x);

    GeoPoint2d::latlon(lat2.to_degrees(), wrap_longitude(lon2.to_degrees()))
}

/// Normalizes a longitude in degrees into `[-180, 180)`.
pub(crate) fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

//! Point in polygon test on the sphere.
//!
//! A polygon is a closed loop of vertices: the last vertex connects back to the first. Its edges
//! are either great circle arcs (`geodesic = true`) or rhumb lines (`geodesic = false`). A point
//! is inside when the meridian arc from it down to the South Pole crosses the boundary an odd
//! number of times, so the South Pole is always outside.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geo::impls::projection::mercator_y;
use crate::geo::GeoPoint;
use crate::polyline::{self, Precision};

/// Returns true if `point` is inside `polygon` or on one of its vertices.
///
/// An empty polygon contains nothing. Vertices at the poles never produce crossings.
pub fn contains_position<P>(
    polygon: &[P],
    point: &impl GeoPoint<Num = f64>,
    geodesic: bool,
) -> bool
where
    P: GeoPoint<Num = f64>,
{
    let Some(last) = polygon.last() else {
        return false;
    };

    let lat3 = point.lat_rad();
    let lon3 = point.lon_rad();

    let mut lat1 = last.lat_rad();
    let mut lon1 = last.lon_rad();
    let mut crossings = 0usize;

    for vertex in polygon {
        let d_lon3 = wrap_radians(lon3 - lon1);

        if lat3 == lat1 && d_lon3 == 0.0 {
            return true;
        }

        let lat2 = vertex.lat_rad();
        let lon2 = vertex.lon_rad();

        if intersects(lat1, lat2, wrap_radians(lon2 - lon1), lat3, d_lon3, geodesic) {
            crossings += 1;
        }

        lat1 = lat2;
        lon1 = lon2;
    }

    crossings % 2 == 1
}

/// Returns true if any of the encoded polygons contains `point`.
///
/// Polygons that fail to decode are treated as containing nothing.
pub fn any_contains<S: AsRef<str>>(
    encoded_polygons: &[S],
    point: &impl GeoPoint<Num = f64>,
    precision: Precision,
    geodesic: bool,
) -> bool {
    encoded_polygons.iter().any(|encoded| {
        match polyline::decode(encoded.as_ref(), precision) {
            Some(vertices) => contains_position(&vertices, point, geodesic),
            None => {
                log::debug!("Skipping polygon that cannot be decoded");
                false
            }
        }
    })
}

/// Whether the meridian arc from `(lat3, lon3)` down to the South Pole crosses the segment from
/// `(lat1, 0)` to `(lat2, lon2)`.
///
/// All values are in radians. Longitudes are already shifted by the longitude of the segment
/// start, so the start sits at longitude 0.
fn intersects(lat1: f64, lat2: f64, lon2: f64, lat3: f64, lon3: f64, geodesic: bool) -> bool {
    // Both ends on the same side of lon3.
    if (lon3 >= 0.0 && lon3 >= lon2) || (lon3 < 0.0 && lon3 < lon2) {
        return false;
    }

    if lat3 <= -FRAC_PI_2 {
        return false;
    }

    if lat1 <= -FRAC_PI_2 || lat2 <= -FRAC_PI_2 || lat1 >= FRAC_PI_2 || lat2 >= FRAC_PI_2 {
        return false;
    }

    if lon2 <= -PI {
        return false;
    }

    let linear_lat = (lat1 * (lon2 - lon3) + lat2 * lon3) / lon2;

    // Northern hemisphere and the point is under the lat-lon line.
    if lat1 >= 0.0 && lat2 >= 0.0 && lat3 < linear_lat {
        return false;
    }

    // Southern hemisphere and the point is above the lat-lon line.
    if lat1 <= 0.0 && lat2 <= 0.0 && lat3 >= linear_lat {
        return true;
    }

    if lat3 >= FRAC_PI_2 {
        return true;
    }

    // Compare lat3 with the latitude of the segment at lon3 through a strictly increasing
    // function: tan() for great circles, Mercator y for rhumb lines.
    if geodesic {
        tan_lat_great_circle(lat1, lat2, lon2, lon3) <= lat3.tan()
    } else {
        mercator_lat_rhumb(lat1, lat2, lon2, lon3) <= mercator_y(lat3)
    }
}

/// tan() of the latitude at `lon3` on the great circle from `(lat1, 0)` to `(lat2, lon2)`.
fn tan_lat_great_circle(lat1: f64, lat2: f64, lon2: f64, lon3: f64) -> f64 {
    (lat1.tan() * (lon2 - lon3).sin() + lat2.tan() * lon3.sin()) / lon2.sin()
}

/// Mercator y of the latitude at `lon3` on the rhumb line from `(lat1, 0)` to `(lat2, lon2)`.
fn mercator_lat_rhumb(lat1: f64, lat2: f64, lon2: f64, lon3: f64) -> f64 {
    (mercator_y(lat1) * (lon2 - lon3) + mercator_y(lat2) * lon3) / lon2
}

/// Wraps an angle in radians into `[-PI, PI)`.
fn wrap_radians(angle: f64) -> f64 {
    if (-PI..PI).contains(&angle) {
        angle
    } else {
        (angle + PI).rem_euclid(2.0 * PI) - PI
    }
}

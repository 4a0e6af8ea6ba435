use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

use crate::cartesian::Point2;
use crate::geo::datum::Datum;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Mercator ordinate of a latitude (in radians) on the unit sphere.
///
/// This is a strictly increasing function of latitude, infinite at the poles.
pub(crate) fn mercator_y(lat_rad: f64) -> f64 {
    (FRAC_PI_4 + lat_rad / 2.0).tan().ln()
}

/// Spherical Web Mercator projection into meters.
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In> {
    datum: Datum,
    phantom_in: PhantomData<In>,
}

impl<In> WebMercator<In> {
    /// Creates a projection on the sphere of the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
        }
    }

    /// Length of the equator in projected meters.
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.datum.semimajor()
    }
}

impl<In> Default for WebMercator<In> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>> Projection for WebMercator<In> {
    type InPoint = In;
    type OutPoint = Point2;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        // tan(PI / 2) is finite in f64, so the poles have to be excluded explicitly.
        if input.lat().is_nan() || input.lat().abs() >= 90.0 {
            return None;
        }

        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor() * mercator_y(input.lat_rad());

        if x.is_finite() && y.is_finite() {
            Some(Point2::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lat = 2.0 * (input.y() / self.datum.semimajor()).exp().atan() - FRAC_PI_2;
        let lon = input.x() / self.datum.semimajor();

        if lat.is_finite() && lon.is_finite() {
            Some(In::latlon(lat.to_degrees(), lon.to_degrees()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::GeoPoint;

    #[test]
    fn origin_projects_to_zero() {
        let projection = WebMercator::<GeoPoint2d>::default();
        let projected = projection
            .project(&GeoPoint2d::latlon(0.0, 0.0))
            .expect("projectable");
        assert_abs_diff_eq!(projected.x(), 0.0);
        assert_abs_diff_eq!(projected.y(), 0.0);
    }

    #[test]
    fn antimeridian_is_half_circumference() {
        let projection = WebMercator::<GeoPoint2d>::default();
        let projected = projection
            .project(&GeoPoint2d::latlon(0.0, 180.0))
            .expect("projectable");
        assert_abs_diff_eq!(projected.x(), projection.circumference() / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn unproject_reverses_project() {
        let projection = WebMercator::<GeoPoint2d>::default();
        let point = GeoPoint2d::latlon(55.75, 37.62);
        let projected = projection.project(&point).expect("projectable");
        let back = projection.unproject(&projected).expect("unprojectable");

        assert_abs_diff_eq!(back.lat(), point.lat(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.lon(), point.lon(), epsilon = 1e-9);
    }

    #[test]
    fn pole_is_not_projectable() {
        let projection = WebMercator::<GeoPoint2d>::default();
        assert!(projection.project(&GeoPoint2d::latlon(90.0, 0.0)).is_none());
    }
}

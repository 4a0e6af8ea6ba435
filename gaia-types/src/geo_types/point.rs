use ::geo_types::{point, CoordNum, Point};
use num_traits::Float;

use crate::geo::impls::GeoPoint2d;
use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordNum + Float> GeoPoint for Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl From<GeoPoint2d> for Point<f64> {
    fn from(point: GeoPoint2d) -> Self {
        Self::latlon(point.lat(), point.lon())
    }
}

impl From<Point<f64>> for GeoPoint2d {
    fn from(point: Point<f64>) -> Self {
        Self::latlon(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::heading;

    #[test]
    fn point_roundtrip() {
        let point: Point<f64> = point!(x: -0.1278, y: 51.5074);
        let geo: GeoPoint2d = point.into();
        assert_eq!(geo.lat(), 51.5074);
        assert_eq!(Point::from(geo), point);
    }

    #[test]
    fn points_work_with_geodesic_functions() {
        let origin: Point<f64> = Point::latlon(0.0, 0.0);
        let east: Point<f64> = Point::latlon(0.0, 1.0);
        assert!((heading(&origin, &east) - 90.0).abs() < 1e-9);
    }
}

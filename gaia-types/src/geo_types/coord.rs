use ::geo_types::{coord, Coord, CoordNum};
use num_traits::Float;

use crate::geo::impls::GeoPoint2d;
use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordNum + Float> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}

impl From<GeoPoint2d> for Coord<f64> {
    fn from(point: GeoPoint2d) -> Self {
        Self::latlon(point.lat(), point.lon())
    }
}

impl From<Coord<f64>> for GeoPoint2d {
    fn from(coord: Coord<f64>) -> Self {
        Self::latlon(coord.y, coord.x)
    }
}

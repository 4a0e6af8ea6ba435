use num_traits::{cast, Float};

use crate::geo::geodesic;

/// Point on the surface of the Earth given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Returns true if latitude is in `[-90, 90]`, longitude is in `[-180, 180]` and neither is
    /// NaN.
    fn is_valid(&self) -> bool {
        match (cast::<f64, Self::Num>(90.0), cast::<f64, Self::Num>(180.0)) {
            (Some(max_lat), Some(max_lon)) => {
                self.lat().abs() <= max_lat && self.lon().abs() <= max_lon
            }
            _ => false,
        }
    }

    /// Equirectangular distance to `other` in meters, or infinity if either point is invalid.
    ///
    /// See [`geodesic::distance`].
    fn distance_to(&self, other: &impl GeoPoint<Num = f64>) -> f64
    where
        Self: GeoPoint<Num = f64> + Sized,
    {
        geodesic::distance(self, other)
    }
}

/// Geographic point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;

    #[test]
    fn validity() {
        assert!(GeoPoint2d::latlon(0.0, 0.0).is_valid());
        assert!(GeoPoint2d::latlon(90.0, -180.0).is_valid());
        assert!(GeoPoint2d::latlon(-90.0, 180.0).is_valid());
        assert!(!GeoPoint2d::latlon(90.1, 0.0).is_valid());
        assert!(!GeoPoint2d::latlon(0.0, -180.5).is_valid());
        assert!(!GeoPoint2d::latlon(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint2d::latlon(0.0, f64::NAN).is_valid());
        assert!(!GeoPoint2d::latlon(f64::INFINITY, 0.0).is_valid());
    }

    #[test]
    fn lonlat_swaps_arguments() {
        let point = GeoPoint2d::lonlat(10.0, 20.0);
        assert_eq!(point.lat(), 20.0);
        assert_eq!(point.lon(), 10.0);
    }
}

use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Number of decimal digits compared by point equality. `1e-5` degree is about 1.1 m.
const EQUALITY_SCALE: f64 = 100_000.0;

/// 2d point on the surface of the Earth.
///
/// Two points are equal when their coordinates match after rounding to 5 decimal digits. All
/// invalid points (see [`GeoPoint::is_valid`]) are equal to each other and never equal to a valid
/// one. [`Hash`] is consistent with this equality.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    /// Numeric type used to represent coordinates.
    type Num = f64;

    /// Latitude in degrees.
    fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Point used where no valid location is known.
    pub const INVALID: Self = Self {
        lat: f64::NAN,
        lon: f64::NAN,
    };

    /// Creates a new from point from another.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }

    /// Returns true if the equirectangular distance to `other` is not greater than `meters`.
    ///
    /// Unlike `==` this relation is not transitive.
    pub fn is_near(&self, other: &impl GeoPoint<Num = f64>, meters: f64) -> bool {
        self.distance_to(other) <= meters
    }

    fn equality_key(&self) -> Option<(i64, i64)> {
        if !self.is_valid() {
            return None;
        }

        Some((
            (self.lat * EQUALITY_SCALE).round() as i64,
            (self.lon * EQUALITY_SCALE).round() as i64,
        ))
    }
}

impl PartialEq for GeoPoint2d {
    fn eq(&self, other: &Self) -> bool {
        self.equality_key() == other.equality_key()
    }
}

impl Eq for GeoPoint2d {}

impl Hash for GeoPoint2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality_key().hash(state);
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use gaia_types::geo::GeoPoint;
/// use gaia_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon(
            $lat, $lon,
        )
    };
}

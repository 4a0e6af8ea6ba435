/// Sphere used as the model of the Earth by all geodesic calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// WGS84 equatorial radius used as the radius of a sphere.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Sphere with the given radius in meters.
    pub const fn sphere(radius: f64) -> Self {
        Self { semimajor: radius }
    }

    /// Radius of the sphere in meters.
    pub const fn semimajor(&self) -> f64 {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

//! Shapes drawn on a map.

use serde::{Deserialize, Serialize};

use crate::bounds::CoordinateBounds;
use crate::geo::impls::GeoPoint2d;
use crate::geo::{offset, GeoPoint};
use crate::polygon;
use crate::polyline::{self, Precision};

/// Heading of the north-west corner of a circle's bounds as seen from its center.
const NORTH_WEST: f64 = 315.0;
/// Heading of the south-east corner of a circle's bounds as seen from its center.
const SOUTH_EAST: f64 = 135.0;

/// Something drawn on a map that may occupy an area.
pub trait Shape {
    /// Area covered by the shape, or `None` if it has no known extent.
    fn bounds(&self) -> Option<CoordinateBounds>;
}

impl<T: Shape + ?Sized> Shape for &T {
    fn bounds(&self) -> Option<CoordinateBounds> {
        (**self).bounds()
    }
}

/// Closed polygon. The last vertex is connected back to the first one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<GeoPoint2d>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    pub fn new(vertices: Vec<GeoPoint2d>) -> Self {
        Self { vertices }
    }

    /// Decodes the vertices from an encoded polyline string.
    pub fn from_encoded(path: &str, precision: Precision) -> Option<Self> {
        polyline::decode(path, precision).map(Self::new)
    }

    /// Vertices of the polygon.
    pub fn vertices(&self) -> &[GeoPoint2d] {
        &self.vertices
    }

    /// Encodes the vertices as a polyline string.
    pub fn encode(&self, precision: Precision) -> String {
        polyline::encode(&self.vertices, precision)
    }

    /// See [`polygon::contains_position`].
    pub fn contains_position(&self, point: &impl GeoPoint<Num = f64>, geodesic: bool) -> bool {
        polygon::contains_position(&self.vertices, point, geodesic)
    }
}

impl Shape for Polygon {
    fn bounds(&self) -> Option<CoordinateBounds> {
        (!self.vertices.is_empty()).then(|| CoordinateBounds::from_coordinates(&self.vertices))
    }
}

/// Open path of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint2d>,
}

impl Polyline {
    /// Creates a polyline from its points.
    pub fn new(points: Vec<GeoPoint2d>) -> Self {
        Self { points }
    }

    /// Decodes the points from an encoded polyline string.
    pub fn from_encoded(path: &str, precision: Precision) -> Option<Self> {
        polyline::decode(path, precision).map(Self::new)
    }

    /// Points of the path.
    pub fn points(&self) -> &[GeoPoint2d] {
        &self.points
    }

    /// Encodes the points as a polyline string.
    pub fn encode(&self, precision: Precision) -> String {
        polyline::encode(&self.points, precision)
    }
}

impl Shape for Polyline {
    fn bounds(&self) -> Option<CoordinateBounds> {
        (!self.points.is_empty()).then(|| CoordinateBounds::from_coordinates(&self.points))
    }
}

/// Circle with a radius in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: GeoPoint2d,
    radius: f64,
}

impl Circle {
    /// Creates a circle. `radius` is in meters and is expected to be positive.
    pub fn new(center: GeoPoint2d, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center of the circle.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Radius in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    /// Box with corners at `radius` meters from the center towards north-west and south-east.
    ///
    /// The corners lie on the circle, so the box is smaller than the circle's true bounding box.
    /// Circles with an invalid center or radius have no bounds.
    fn bounds(&self) -> Option<CoordinateBounds> {
        if !self.center.is_valid() || !self.radius.is_finite() {
            return None;
        }

        let north_west = offset(&self.center, self.radius, NORTH_WEST);
        let south_east = offset(&self.center, self.radius, SOUTH_EAST);

        Some(CoordinateBounds::from_corners(&north_west, &south_east))
    }
}

use ::geo_types::{Coord, LineString};

use crate::geo::impls::GeoPoint2d;
use crate::shape::{Polygon, Polyline};

impl From<&Polyline> for LineString<f64> {
    fn from(polyline: &Polyline) -> Self {
        polyline.points().iter().map(|&p| Coord::from(p)).collect()
    }
}

impl From<LineString<f64>> for Polyline {
    fn from(line: LineString<f64>) -> Self {
        Polyline::new(line.coords().map(GeoPoint2d::from).collect())
    }
}

impl From<&Polygon> for ::geo_types::Polygon<f64> {
    /// Polygon without holes. The exterior ring gets closed.
    fn from(polygon: &Polygon) -> Self {
        let exterior: LineString<f64> =
            polygon.vertices().iter().map(|&p| Coord::from(p)).collect();
        ::geo_types::Polygon::new(exterior, vec![])
    }
}

impl From<&::geo_types::Polygon<f64>> for Polygon {
    /// Vertices of the exterior ring. Holes are dropped, and so is the closing vertex.
    fn from(polygon: &::geo_types::Polygon<f64>) -> Self {
        let exterior = polygon.exterior();
        let mut vertices: Vec<GeoPoint2d> = exterior.coords().map(GeoPoint2d::from).collect();
        if exterior.is_closed() && vertices.len() > 1 {
            vertices.pop();
        }

        Polygon::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use ::geo_types::{coord, line_string};

    use super::*;
    use crate::geo::NewGeoPoint;

    fn square() -> Polygon {
        Polygon::new(vec![
            GeoPoint2d::latlon(0.0, 0.0),
            GeoPoint2d::latlon(0.0, 10.0),
            GeoPoint2d::latlon(10.0, 10.0),
            GeoPoint2d::latlon(10.0, 0.0),
        ])
    }

    #[test]
    fn polygon_is_closed_and_reopened() {
        let converted = ::geo_types::Polygon::from(&square());
        assert_eq!(converted.exterior().0.len(), 5);
        assert_eq!(converted.exterior().0[1], coord!(x: 10.0, y: 0.0));

        let back = Polygon::from(&converted);
        assert_eq!(back, square());
        assert!(back.contains_position(&GeoPoint2d::latlon(5.0, 5.0), true));
    }

    #[test]
    fn polyline_to_line_string() {
        let line = line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)];
        let polyline = Polyline::from(line.clone());
        assert_eq!(polyline.points()[1], GeoPoint2d::latlon(4.0, 3.0));
        assert_eq!(LineString::from(&polyline), line);
    }
}

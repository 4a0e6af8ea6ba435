//! Zoom levels of Web Mercator tiled maps.
//!
//! Zoom 0 shows the whole world as a single [`TILE_SIZE`] square, and each next level doubles the
//! magnification. Pixel coordinates here are "world pixels" at [`MAX_ZOOM`]: the world is
//! `TILE_SIZE * 2^MAX_ZOOM` pixels wide, x grows to the East and y grows to the South.

use serde::{Deserialize, Serialize};

use crate::cartesian::{Point2, Size};
use crate::geo::impls::projection::WebMercator;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Size of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Zoom level of the world pixel space.
pub const MAX_ZOOM: f64 = 20.0;

/// Width of the world in pixels at the given zoom level.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Latitude and longitude extent of a map region, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    /// North to south extent.
    pub latitude_delta: f64,
    /// West to east extent.
    pub longitude_delta: f64,
}

/// Converts a point into world pixels at [`MAX_ZOOM`].
///
/// Returns `None` for the poles and invalid points.
pub fn to_world_pixels(point: &impl GeoPoint<Num = f64>) -> Option<Point2> {
    let projection = WebMercator::<GeoPoint2d>::default();
    let meters = projection.project(&GeoPoint2d::from(point))?;

    let circumference = projection.circumference();
    let scale = world_size(MAX_ZOOM) / circumference;

    Some(Point2::new(
        (meters.x() + circumference / 2.0) * scale,
        (circumference / 2.0 - meters.y()) * scale,
    ))
}

/// Converts world pixels at [`MAX_ZOOM`] back into a geographic point.
pub fn from_world_pixels(pixels: &Point2) -> Option<GeoPoint2d> {
    let projection = WebMercator::<GeoPoint2d>::default();
    let circumference = projection.circumference();
    let scale = circumference / world_size(MAX_ZOOM);

    let meters = Point2::new(
        pixels.x() * scale - circumference / 2.0,
        circumference / 2.0 - pixels.y() * scale,
    );

    projection.unproject(&meters)
}

/// Zoom level at which `longitude_delta` degrees fill `viewport_width` pixels.
///
/// Result is not clamped and can be negative or above [`MAX_ZOOM`].
pub fn zoom_for_longitude_span(longitude_delta: f64, viewport_width: f64) -> f64 {
    let pixels_at_max_zoom = longitude_delta / 360.0 * world_size(MAX_ZOOM);
    MAX_ZOOM - (pixels_at_max_zoom / viewport_width).log2()
}

/// Span of the region centered at `center` that fills `viewport` at the given `zoom`.
///
/// Returns `None` if the center or a corner of the region cannot be projected.
pub fn span_for_zoom(
    center: &impl GeoPoint<Num = f64>,
    zoom: f64,
    viewport: Size,
) -> Option<CoordinateSpan> {
    let center_pixels = to_world_pixels(center)?;

    let zoom_scale = (MAX_ZOOM - zoom).exp2();
    let scaled_width = viewport.width() * zoom_scale;
    let scaled_height = viewport.height() * zoom_scale;

    let top_left = Point2::new(
        center_pixels.x() - (scaled_width * 0.5).round(),
        center_pixels.y() - (scaled_height * 0.5).round(),
    );
    let bottom_right = Point2::new(top_left.x() + scaled_width, top_left.y() + scaled_height);

    let min = from_world_pixels(&top_left)?;
    let max = from_world_pixels(&bottom_right)?;

    Some(CoordinateSpan {
        latitude_delta: min.lat() - max.lat(),
        longitude_delta: max.lon() - min.lon(),
    })
}

/// Zoom level of a map showing `span` in the given `viewport`.
pub fn zoom_for_span(span: CoordinateSpan, viewport: Size) -> f64 {
    zoom_for_longitude_span(span.longitude_delta, viewport.width())
}

impl CoordinateSpan {
    /// Creates a new span.
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    /// Corners `(north_west, south_east)` of the span centered at `center`.
    pub fn corners(&self, center: &impl GeoPoint<Num = f64>) -> (GeoPoint2d, GeoPoint2d) {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (
            GeoPoint2d::latlon(center.lat() + half_lat, center.lon() - half_lon),
            GeoPoint2d::latlon(center.lat() - half_lat, center.lon() + half_lon),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn whole_world_in_one_tile_is_zoom_zero() {
        assert_abs_diff_eq!(zoom_for_longitude_span(360.0, TILE_SIZE), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(zoom_for_longitude_span(180.0, TILE_SIZE), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            zoom_for_longitude_span(360.0, TILE_SIZE * 4.0),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn world_pixels_of_origin_is_world_center() {
        let pixels = to_world_pixels(&GeoPoint2d::latlon(0.0, 0.0)).expect("projectable");
        let half = world_size(MAX_ZOOM) / 2.0;
        assert_abs_diff_eq!(pixels.x(), half, epsilon = 1e-6);
        assert_abs_diff_eq!(pixels.y(), half, epsilon = 1e-6);
    }

    #[test]
    fn north_is_up_in_world_pixels() {
        let north = to_world_pixels(&GeoPoint2d::latlon(10.0, 0.0)).expect("projectable");
        let south = to_world_pixels(&GeoPoint2d::latlon(-10.0, 0.0)).expect("projectable");
        assert!(north.y() < south.y());
    }

    #[test]
    fn world_pixels_round_trip() {
        let point = GeoPoint2d::latlon(-33.8688, 151.2093);
        let pixels = to_world_pixels(&point).expect("projectable");
        let back = from_world_pixels(&pixels).expect("unprojectable");
        assert_abs_diff_eq!(back, point, epsilon = 1e-9);
    }

    #[test]
    fn span_matches_zoom() {
        let viewport = Size::new(512.0, 512.0);
        let span = span_for_zoom(&GeoPoint2d::latlon(0.0, 0.0), 1.0, viewport).expect("span");

        assert_abs_diff_eq!(span.longitude_delta, 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(span.latitude_delta, 2.0 * 85.051_128_779_806_6, epsilon = 1e-6);
        assert_abs_diff_eq!(zoom_for_span(span, viewport), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn span_of_pole_is_none() {
        let viewport = Size::new(100.0, 100.0);
        assert!(span_for_zoom(&GeoPoint2d::latlon(90.0, 0.0), 5.0, viewport).is_none());
    }

    #[test]
    fn span_corners() {
        let span = CoordinateSpan::new(2.0, 4.0);
        let (north_west, south_east) = span.corners(&GeoPoint2d::latlon(10.0, 20.0));
        assert_eq!(north_west, GeoPoint2d::latlon(11.0, 18.0));
        assert_eq!(south_east, GeoPoint2d::latlon(9.0, 22.0));
    }
}

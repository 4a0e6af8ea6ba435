//! Provider independent geometry for map adapters.
//!
//! This crate contains the math that map adapters share regardless of which SDK draws the map:
//!
//! * [`GeoPoint`] trait and the [`GeoPoint2d`](geo::impls::GeoPoint2d) value type, with the
//!   cheap equirectangular [`distance`](geo::distance),
//! * great circle [`interpolate`](geo::interpolate), [`heading`](geo::heading) and
//!   [`offset`](geo::offset) on a spherical Earth,
//! * [Encoded Polyline Algorithm Format](polyline) codec,
//! * point-in-polygon test over great circle or rhumb line edges (see [`polygon`]),
//! * [`CoordinateBounds`] construction and derivation,
//! * [`Shape`] trait with polygon, polyline and circle shapes,
//! * Web Mercator [`zoom`](geo::zoom) helpers.
//!
//! Every function here is pure. Invalid geographic input is reported through sentinel values
//! (infinite distance, NaN coordinates, zero heading) and never panics. The only fallible
//! boundary is decoding of an encoded path.
//!
//! ```
//! use gaia_types::geo::{distance, heading, offset};
//! use gaia_types::latlon;
//!
//! let start = latlon!(37.7749, -122.4194);
//! let end = offset(&start, 1_000.0, 90.0);
//!
//! assert!((distance(&start, &end) - 1_000.0).abs() < 1.0);
//! assert!((heading(&start, &end) - 90.0).abs() < 0.01);
//! ```

pub mod bounds;
pub mod cartesian;
pub mod error;
pub mod geo;
pub mod polygon;
pub mod polyline;
pub mod shape;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounds::CoordinateBounds;
pub use geo::impls::GeoPoint2d;
pub use geo::{GeoPoint, NewGeoPoint};
pub use polyline::Precision;
pub use shape::{Circle, Polygon, Polyline, Shape};

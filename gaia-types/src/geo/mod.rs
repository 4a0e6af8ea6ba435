//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]), great circle
//! math on a spherical Earth (see [`geodesic`]) and conversion into Web Mercator
//! (see [`Projection`] and [`zoom`]).

mod datum;
pub mod geodesic;
pub mod impls;
mod traits;
pub mod zoom;

pub use datum::Datum;
pub use geodesic::{
    angular_distance, distance, great_circle_distance, heading, interpolate, offset,
};
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;

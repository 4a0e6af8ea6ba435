//! Adapters for [`geo_types`] values. `x` is longitude and `y` is latitude.

mod coord;
mod point;
mod shape;

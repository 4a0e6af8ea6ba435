//! Implementations of the supported projections.
mod web_mercator;

pub use web_mercator::WebMercator;
pub(crate) use web_mercator::mercator_y;

//! Types in cartesian (projected or screen) coordinates.

mod point;
mod size;

pub use point::Point2;
pub use size::Size;

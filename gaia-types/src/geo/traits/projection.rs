/// Conversion between two coordinate spaces.
///
/// Both directions return `None` when the input has no representation in the target space (for
/// example, the poles in Web Mercator).
pub trait Projection {
    /// Source point type.
    type InPoint;
    /// Target point type.
    type OutPoint;

    /// Converts a point into the target space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point back into the source space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

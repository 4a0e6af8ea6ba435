use serde::{Deserialize, Serialize};

/// Size of a rectangular area, e.g. a map viewport in pixels.
///
/// Negative dimensions are clamped to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Width of the area.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the area.
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_are_clamped() {
        let size = Size::new(-10.0, 20.0);
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 20.0);
    }
}

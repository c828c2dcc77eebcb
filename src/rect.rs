use crate::units::*;

/// A rectangle on the canvas, specified by its top-left and bottom-right corners.
/// The y axis points down, as it does in the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x0: Px,
    /// The y-coordinate of the top edge.
    pub y0: Px,
    /// The x-coordinate of the right edge.
    pub x1: Px,
    /// The y-coordinate of the bottom edge.
    pub y1: Px,
}

impl Rect {
    /// Create a rectangle from its two corners
    pub fn new(x0: impl Into<Px>, y0: impl Into<Px>, x1: impl Into<Px>, y1: impl Into<Px>) -> Rect {
        Rect {
            x0: x0.into(),
            y0: y0.into(),
            x1: x1.into(),
            y1: y1.into(),
        }
    }

    pub fn width(&self) -> Px {
        self.x1 - self.x0
    }

    pub fn height(&self) -> Px {
        self.y1 - self.y0
    }
}

pub(crate) mod circle;
pub(crate) mod lines;
pub(crate) mod polygon;
pub(crate) mod rounded_rect;

pub use circle::CircleCmd;
pub use lines::{LineSegment, LinesCmd};
pub use polygon::PolygonCmd;
pub use rounded_rect::RoundedRectCmd;

use crate::paint::Color;

/// Soft halo drawn beneath a shape.
///
/// The shape's silhouette is Gaussian-blurred with standard deviation
/// `radius`, then every visible pixel is recolored to `color`'s RGB. The glow's
/// own alpha is not applied; coverage comes from the blurred silhouette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub radius: f32,
}

impl Glow {
    #[inline]
    pub fn new(color: Color, radius: f32) -> Self {
        Self { color, radius }
    }

    /// A glow with a non-positive radius draws nothing.
    #[inline]
    pub fn is_visible(self) -> bool {
        self.radius > 0.0
    }
}

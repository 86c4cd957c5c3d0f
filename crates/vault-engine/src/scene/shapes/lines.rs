use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// One-pixel-wide segment between two pixel centers, endpoints inclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

impl LineSegment {
    /// Segment from pixel `(x0, y0)` to pixel `(x1, y1)`.
    #[inline]
    pub fn between_pixels(x0: u32, y0: u32, x1: u32, y1: u32, color: Color) -> Self {
        Self {
            from: Vec2::pixel_center(x0, y0),
            to: Vec2::pixel_center(x1, y1),
            color,
        }
    }
}

/// A batch of hairlines drawn into one layer, optionally blurred as a whole.
///
/// Lines are rasterized at output resolution; `blur` (a Gaussian standard
/// deviation, `0.0` to disable) supplies the softening instead of supersampling.
#[derive(Debug, Clone, PartialEq)]
pub struct LinesCmd {
    pub frame: Rect,
    pub segments: Vec<LineSegment>,
    pub blur: f32,
}

impl DrawList {
    /// Records a batch of line segments sharing one layer.
    #[inline]
    pub fn push_lines(&mut self, z: ZIndex, frame: Rect, segments: Vec<LineSegment>, blur: f32) {
        self.push(z, DrawCmd::Lines(LinesCmd { frame, segments, blur }));
    }
}

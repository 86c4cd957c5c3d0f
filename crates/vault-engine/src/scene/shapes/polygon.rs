use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Glow;

/// Filled polygon draw payload.
///
/// `points` are in canvas pixels and are closed implicitly. `frame` is the
/// canvas region the polygon's layer occupies; it bounds both the sharp fill
/// and the glow, so it should leave room for the blur to spread.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub frame: Rect,
    pub color: Color,
    pub glow: Option<Glow>,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, frame: Rect, color: Color, glow: Option<Glow>) -> Self {
        Self { points, frame, color, glow }
    }
}

impl DrawList {
    /// Records a filled polygon, optionally with a glow beneath it.
    #[inline]
    pub fn push_polygon(
        &mut self,
        z: ZIndex,
        points: Vec<Vec2>,
        frame: Rect,
        color: Color,
        glow: Option<Glow>,
    ) {
        self.push(z, DrawCmd::Polygon(PolygonCmd::new(points, frame, color, glow)));
    }
}

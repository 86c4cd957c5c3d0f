use crate::coords::Vec2;
use crate::paint::{BlendMode, Color};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// `Replace` circles are drawn with hard edges and overwrite what lies beneath.
    pub blend: BlendMode,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color, blend: BlendMode::SourceOver }
    }

    #[inline]
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, color)));
    }

    /// Records a circle whose pixels are written as-is, translucent alpha included.
    #[inline]
    pub fn push_stamped_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        let cmd = CircleCmd::new(center, radius, color).with_blend(BlendMode::Replace);
        self.push(z, DrawCmd::Circle(cmd));
    }
}

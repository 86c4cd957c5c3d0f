/// Per-corner radii for a rounded rectangle (canvas pixels).
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
/// Renderers clamp each radius to `[0, min(width, height) / 2]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// Returns radii clamped to what a `width` x `height` box can hold.
    #[inline]
    pub fn clamped_to(self, width: f32, height: f32) -> Self {
        let max = (width.min(height) / 2.0).max(0.0);
        let clamp = |r: f32| r.clamp(0.0, max);
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_to_caps_at_half_the_short_side() {
        let r = CornerRadii::all(40.0).clamped_to(60.0, 20.0);
        assert_eq!(r, CornerRadii::all(10.0));
    }

    #[test]
    fn clamped_to_zeroes_negative_radii() {
        let r = CornerRadii { top_left: -3.0, ..CornerRadii::all(4.0) }.clamped_to(100.0, 100.0);
        assert_eq!(r.top_left, 0.0);
        assert_eq!(r.bottom_right, 4.0);
    }
}

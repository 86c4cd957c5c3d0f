use super::Vec2;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Integer placement of a rectangle on the pixel grid.
///
/// `x`/`y` may be negative; layers placed partly off-canvas are clipped when
/// composited.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelFrame {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `side` anchored at the origin.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    /// Square of side `side` centered on `center`.
    #[inline]
    pub fn centered_square(center: Vec2, side: f32) -> Self {
        Self::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Shrinks the rectangle by `margin` on every side.
    ///
    /// Margins larger than half the extent collapse that axis to zero.
    #[inline]
    pub fn inset(self, margin: f32) -> Self {
        let r = self.normalized();
        let w = (r.size.x - margin * 2.0).max(0.0);
        let h = (r.size.y - margin * 2.0).max(0.0);
        Rect::new(r.origin.x + margin, r.origin.y + margin, w, h)
    }

    /// Snaps the rectangle outward onto whole pixels.
    pub fn pixel_frame(self) -> PixelFrame {
        let r = self.normalized();
        let x0 = r.origin.x.floor();
        let y0 = r.origin.y.floor();
        let x1 = (r.origin.x + r.size.x).ceil();
        let y1 = (r.origin.y + r.size.y).ceil();

        PixelFrame {
            x: x0 as i64,
            y: y0 as i64,
            width: (x1 - x0).max(0.0) as u32,
            height: (y1 - y0).max(0.0) as u32,
        }
    }
}

impl PixelFrame {
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Top-left corner as a canvas-space point.
    #[inline]
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

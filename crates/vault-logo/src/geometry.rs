//! Shape descriptors for the logo, derived from the target size.
//!
//! Every dimension is a fixed proportion of the canvas side, truncated to a
//! whole pixel. Truncation (rather than rounding) is part of the look: the
//! small sizes were tuned with it.

use vault_engine::coords::{Rect, Vec2};
use vault_engine::paint::Color;
use vault_engine::scene::LineSegment;

pub const OUTER_RADIUS_RATIO: f64 = 0.22;
pub const INNER_MARGIN_RATIO: f64 = 0.035;
/// Inner panel radius as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.85;

pub const GLYPH_CENTER_Y_RATIO: f64 = 0.52;
pub const GLYPH_WIDTH_RATIO: f64 = 0.50;
pub const GLYPH_HEIGHT_RATIO: f64 = 0.46;
pub const GLYPH_THICKNESS_RATIO: f64 = 0.095;
pub const MIN_GLOW_RADIUS: u32 = 5;
pub const GLOW_RADIUS_DIVISOR: u32 = 20;

/// Dots and highlight are only drawn at or above this size.
pub const DECORATION_MIN_SIZE: u32 = 128;
pub const DOT_RADIUS_RATIO: f64 = 0.012;
pub const MIN_DOT_RADIUS: u32 = 2;
pub const DOT_NEAR_RATIO: f64 = 0.14;
pub const DOT_FAR_RATIO: f64 = 0.86;

/// Gaussian standard deviation applied to the highlight layer.
pub const HIGHLIGHT_BLUR: f32 = 2.0;

#[inline]
fn scaled(size: u32, ratio: f64) -> u32 {
    (f64::from(size) * ratio) as u32
}

/// All shape descriptors for one logo size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoGeometry {
    pub size: u32,
    pub outer_radius: u32,
    pub margin: u32,
    pub inner_radius: u32,
    pub glyph: GlyphGeometry,
    pub dots: Option<DotGeometry>,
    pub highlight: Option<HighlightGeometry>,
}

impl LogoGeometry {
    pub fn for_size(size: u32) -> Self {
        let outer_radius = scaled(size, OUTER_RADIUS_RATIO);
        let glyph = GlyphGeometry::for_size(size);
        let decorated = size >= DECORATION_MIN_SIZE;

        Self {
            size,
            outer_radius,
            margin: scaled(size, INNER_MARGIN_RATIO),
            inner_radius: scaled(outer_radius, INNER_RADIUS_RATIO),
            dots: decorated.then(|| DotGeometry::for_size(size)),
            highlight: decorated.then(|| HighlightGeometry::for_glyph(&glyph)),
            glyph,
        }
    }

    /// The whole canvas.
    pub fn canvas(&self) -> Rect {
        Rect::square(self.size as f32)
    }

    pub fn outer_panel(&self) -> Rect {
        self.canvas()
    }

    pub fn inner_panel(&self) -> Rect {
        self.canvas().inset(self.margin as f32)
    }
}

/// The "V" mark: a six-point outline inside a `width` x `height` box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub center_x: u32,
    pub center_y: u32,
    pub width: u32,
    pub height: u32,
    pub thickness: u32,
    pub glow_radius: u32,
}

impl GlyphGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            center_x: size / 2,
            center_y: scaled(size, GLYPH_CENTER_Y_RATIO),
            width: scaled(size, GLYPH_WIDTH_RATIO),
            height: scaled(size, GLYPH_HEIGHT_RATIO),
            thickness: scaled(size, GLYPH_THICKNESS_RATIO),
            glow_radius: MIN_GLOW_RADIUS.max(size / GLOW_RADIUS_DIVISOR),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x as f32, self.center_y as f32)
    }

    /// Distance from the center down to the inner apex of the notch.
    ///
    /// Deliberately `height/2 - thickness/3` rather than a proportional depth;
    /// changing it changes the silhouette.
    #[inline]
    pub fn apex_offset(&self) -> f32 {
        self.height as f32 / 2.0 - self.thickness as f32 / 3.0
    }

    /// Outline in canvas pixels: top-left outer, top-left inner, inner apex,
    /// top-right inner, top-right outer, bottom tip.
    pub fn outline(&self) -> Vec<Vec2> {
        let c = self.center();
        let hw = self.width as f32 / 2.0;
        let hh = self.height as f32 / 2.0;
        let t = self.thickness as f32;

        [
            (-hw, -hh),
            (-hw + t, -hh),
            (0.0, self.apex_offset()),
            (hw - t, -hh),
            (hw, -hh),
            (0.0, hh),
        ]
        .into_iter()
        .map(|(dx, dy)| c + Vec2::new(dx, dy))
        .collect()
    }

    /// Layer frame for the glyph and its glow: a square twice the larger box
    /// side, centered on the glyph, leaving room for the blur.
    pub fn frame(&self) -> Rect {
        let side = 2 * self.width.max(self.height);
        Rect::centered_square(self.center(), side as f32)
    }
}

/// Two accent dots near the top corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DotGeometry {
    pub radius: u32,
    pub y: u32,
    pub left_x: u32,
    pub right_x: u32,
}

impl DotGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            radius: MIN_DOT_RADIUS.max(scaled(size, DOT_RADIUS_RATIO)),
            y: scaled(size, DOT_NEAR_RATIO),
            left_x: scaled(size, DOT_NEAR_RATIO),
            right_x: scaled(size, DOT_FAR_RATIO),
        }
    }

    /// Dot centers, on pixel centers so each dot spans `2 * radius + 1` pixels.
    pub fn centers(&self) -> [Vec2; 2] {
        [Vec2::pixel_center(self.left_x, self.y), Vec2::pixel_center(self.right_x, self.y)]
    }

    /// Geometric radius covering `radius` whole pixels either side of the center pixel.
    #[inline]
    pub fn fill_radius(&self) -> f32 {
        self.radius as f32 + 0.5
    }
}

/// Diagonal run of fading one-pixel rows over the glyph's upper-left arm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HighlightGeometry {
    pub origin_x: u32,
    pub origin_y: u32,
    /// Horizontal length of each row, endpoints inclusive.
    pub span: u32,
    pub rows: u32,
}

impl HighlightGeometry {
    pub fn for_glyph(glyph: &GlyphGeometry) -> Self {
        Self {
            origin_x: glyph.center_x.saturating_sub(glyph.width / 2),
            origin_y: glyph.center_y.saturating_sub(glyph.height / 3),
            span: glyph.width / 4,
            rows: glyph.height / 4,
        }
    }

    /// Alpha of row `i`, fading linearly from `peak` to near zero.
    pub fn row_alpha(&self, i: u32, peak: u8) -> u8 {
        if self.rows == 0 {
            return 0;
        }
        (f64::from(peak) * (1.0 - f64::from(i) / f64::from(self.rows))) as u8
    }

    /// Row `i` is shifted one pixel right and one down from row `i - 1`.
    pub fn segments(&self, color: Color, peak: u8) -> Vec<LineSegment> {
        (0..self.rows)
            .map(|i| {
                let y = self.origin_y + i;
                let x0 = self.origin_x + i;
                LineSegment::between_pixels(x0, y, x0 + self.span, y, color.with_alpha(self.row_alpha(i, peak)))
            })
            .collect()
    }
}

use image::Rgba;
use resvg::tiny_skia;

/// Straight (non-premultiplied) sRGB color with 8 bits per channel.
///
/// Channels are stored exactly as they appear in hex literals such as
/// `#667eea`, so every value is in `0..=255` by construction. Conversion to the
/// premultiplied form used by the raster backend happens at fill time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::from_rgb8(255, 255, 255)
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Same RGB with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    #[inline]
    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// Solid fill paint for the raster backend.
    ///
    /// Backend antialiasing is off: edge smoothing comes from supersampling.
    pub(crate) fn to_fill(self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(self.r, self.g, self.b, self.a);
        paint.anti_alias = false;
        paint
    }
}

impl From<Rgba<u8>> for Color {
    #[inline]
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_rgb8(102, 126, 234).with_alpha(80);
        assert_eq!(c.rgb(), [102, 126, 234]);
        assert_eq!(c.a, 80);
    }

    #[test]
    fn pixel_conversion_is_lossless() {
        let c = Color::from_rgba8(15, 15, 26, 200);
        assert_eq!(Color::from(c.to_pixel()), c);
    }

    #[test]
    fn transparent_is_default() {
        assert_eq!(Color::default(), Color::transparent());
        assert!(Color::transparent().is_transparent());
        assert!(!Color::white().is_transparent());
    }
}

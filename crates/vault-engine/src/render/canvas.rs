use image::{imageops, RgbaImage};

use crate::paint::BlendMode;

use super::{Layer, RenderError};

/// Output surface: a straight-alpha RGBA8 image that layers are composited onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width.checked_mul(height).and_then(|n| n.checked_mul(4)).is_none() {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self { image: RgbaImage::new(width, height) })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Merges `layer` at its origin using its blend mode. Off-canvas parts are clipped.
    pub fn composite(&mut self, layer: &Layer) {
        match layer.blend {
            BlendMode::SourceOver => imageops::overlay(&mut self.image, &layer.image, layer.x, layer.y),
            BlendMode::Replace => self.stamp(layer),
        }
    }

    /// Overwrites every canvas pixel under a covered layer pixel.
    fn stamp(&mut self, layer: &Layer) {
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        for (lx, ly, px) in layer.image.enumerate_pixels() {
            if px.0[3] == 0 {
                continue;
            }
            let (x, y) = (layer.x + i64::from(lx), layer.y + i64::from(ly));
            if (0..w).contains(&x) && (0..h).contains(&y) {
                self.image.put_pixel(x as u32, y as u32, *px);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(3, 2).unwrap();
        assert_eq!((c.width(), c.height()), (3, 2));
        assert!(c.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(Canvas::new(0, 5), Err(RenderError::InvalidSize { width: 0, height: 5 }));
    }

    #[test]
    fn composite_places_layer_at_origin_and_clips() {
        let mut c = Canvas::new(4, 4).unwrap();
        let layer = Layer::new(-1, 2, RgbaImage::from_pixel(2, 3, Rgba([9, 8, 7, 255])));
        c.composite(&layer);

        assert_eq!(c.image().get_pixel(0, 2).0, [9, 8, 7, 255]);
        assert_eq!(c.image().get_pixel(0, 3).0, [9, 8, 7, 255]);
        assert_eq!(c.image().get_pixel(1, 2).0, [0, 0, 0, 0]);
        assert_eq!(c.image().get_pixel(0, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn composite_blends_translucent_over_opaque() {
        let mut c = Canvas::new(1, 1).unwrap();
        c.composite(&Layer::new(0, 0, RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))));
        c.composite(&Layer::new(0, 0, RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]))));

        let [r, g, b, a] = c.image().get_pixel(0, 0).0;
        assert_eq!(a, 255);
        assert!((126..=130).contains(&r));
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn replace_overwrites_covered_pixels_alpha_included() {
        let mut c = Canvas::new(3, 1).unwrap();
        c.composite(&Layer::new(0, 0, RgbaImage::from_pixel(3, 1, Rgba([15, 15, 26, 255]))));

        let mut dot = RgbaImage::new(3, 1);
        dot.put_pixel(1, 0, Rgba([102, 126, 234, 80]));
        dot.put_pixel(2, 0, Rgba([102, 126, 234, 80]));
        c.composite(&Layer::new(-1, 0, dot).with_blend(BlendMode::Replace));

        assert_eq!(c.image().get_pixel(0, 0).0, [102, 126, 234, 80]);
        assert_eq!(c.image().get_pixel(1, 0).0, [102, 126, 234, 80]);
        assert_eq!(c.image().get_pixel(2, 0).0, [15, 15, 26, 255]);
    }
}

//! Whole-layer pixel effects: Gaussian blur and glow tinting.

use image::{imageops, ImageBuffer, Rgba, Rgba32FImage, RgbaImage};

use crate::paint::Color;
use crate::scene::Glow;

/// Gaussian blur with standard deviation `sigma`.
///
/// Blurring happens on premultiplied values so transparent neighbours do not
/// bleed black into the edges. `sigma <= 0` returns an unchanged copy.
pub fn gaussian_blur(image: &RgbaImage, sigma: f32) -> RgbaImage {
    if !(sigma > 0.0) {
        return image.clone();
    }

    demultiply(&imageops::blur(&premultiply(image), sigma))
}

/// Straight-alpha RGBA8 to premultiplied unit floats.
pub(crate) fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let a = unit(a);
        Rgba([unit(r) * a, unit(g) * a, unit(b) * a, a])
    })
}

/// Premultiplied unit floats back to straight-alpha RGBA8.
///
/// Pixels whose alpha rounds to zero become fully transparent.
pub(crate) fn demultiply(image: &Rgba32FImage) -> RgbaImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = byte(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([byte(r / a), byte(g / a), byte(b / a), alpha])
    })
}

/// Recolors every pixel with non-zero alpha to `color`'s RGB, keeping its alpha.
///
/// `color.a` is ignored; coverage stays whatever the source pixel had.
pub fn tint_visible(image: &mut RgbaImage, color: Color) {
    let [r, g, b] = color.rgb();
    for px in image.pixels_mut() {
        let a = px.0[3];
        if a > 0 {
            px.0 = [r, g, b, a];
        }
    }
}

/// Builds the glow that sits beneath `silhouette`: blurred, then tinted.
pub fn glow_image(silhouette: &RgbaImage, glow: Glow) -> RgbaImage {
    let mut halo = gaussian_blur(silhouette, glow.radius);
    tint_visible(&mut halo, glow.color);
    halo
}

#[inline]
pub(crate) fn unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

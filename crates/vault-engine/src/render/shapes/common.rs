//! Raster helpers shared by all shape renderers.

use image::{imageops, ImageBuffer, Rgba, Rgba32FImage, RgbaImage};
use resvg::tiny_skia::{FillRule, Path, Pixmap, Transform};

use crate::coords::PixelFrame;
use crate::paint::Color;
use crate::render::effects::{demultiply, unit};
use crate::render::{RenderError, RenderSettings};

// ── surfaces ──────────────────────────────────────────────────────────────

pub(super) fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })
}

/// Converts the backend's premultiplied pixels to a straight-alpha image.
pub(super) fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Copies the backend's premultiplied pixels into unit floats, still premultiplied.
fn pixmap_to_premultiplied(pixmap: &Pixmap) -> Rgba32FImage {
    let mut image: Rgba32FImage = ImageBuffer::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        *dst = Rgba([unit(src.red()), unit(src.green()), unit(src.blue()), unit(src.alpha())]);
    }
    image
}

// ── supersampled fill ─────────────────────────────────────────────────────

/// Fills `path` into an image the size of `frame`.
///
/// `path` is in frame-local output pixels. It is rasterized aliased at
/// `settings.supersample` x scale and downsampled with `settings.filter`.
/// Resampling runs on premultiplied values so partly covered pixels keep the
/// fill's color instead of mixing with the transparent black around the shape.
pub(super) fn fill_supersampled(
    path: &Path,
    color: Color,
    frame: PixelFrame,
    settings: &RenderSettings,
) -> Result<RgbaImage, RenderError> {
    let scale = settings.supersample.max(1);
    let (Some(hi_w), Some(hi_h)) = (frame.width.checked_mul(scale), frame.height.checked_mul(scale))
    else {
        return Err(RenderError::PixmapAllocation { width: frame.width, height: frame.height });
    };

    let mut pixmap = new_pixmap(hi_w, hi_h)?;
    pixmap.fill_path(
        path,
        &color.to_fill(),
        FillRule::Winding,
        Transform::from_scale(scale as f32, scale as f32),
        None,
    );

    if scale == 1 {
        return Ok(pixmap_to_image(&pixmap));
    }
    let hi = pixmap_to_premultiplied(&pixmap);
    Ok(demultiply(&imageops::resize(&hi, frame.width, frame.height, settings.filter)))
}

// ── stamp ─────────────────────────────────────────────────────────────────

/// Rasterizes `path` with hard edges and writes `color` verbatim into every
/// covered pixel.
///
/// The result is meant for [`BlendMode::Replace`](crate::paint::BlendMode)
/// layers, so the color's own alpha must survive untouched.
pub(super) fn fill_stamp(path: &Path, color: Color, frame: PixelFrame) -> Result<RgbaImage, RenderError> {
    let mut mask = new_pixmap(frame.width, frame.height)?;
    mask.fill_path(path, &Color::white().to_fill(), FillRule::Winding, Transform::identity(), None);

    let ink = color.to_pixel();
    let mut image = RgbaImage::new(frame.width, frame.height);
    for (dst, src) in image.pixels_mut().zip(mask.pixels()) {
        if src.alpha() > 0 {
            *dst = ink;
        }
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resvg::tiny_skia::PathBuilder;

    fn disc(center: f32, radius: f32) -> Path {
        PathBuilder::from_circle(center, center, radius).unwrap()
    }

    fn frame(side: u32) -> PixelFrame {
        PixelFrame { x: 0, y: 0, width: side, height: side }
    }

    // ── fill_supersampled ─────────────────────────────────────────────────

    #[test]
    fn supersampled_edges_keep_fill_color() {
        let accent = Color::from_rgb8(102, 126, 234);
        let image = fill_supersampled(&disc(16.0, 12.0), accent, frame(32), &RenderSettings::default()).unwrap();

        let edge: Vec<_> = image.pixels().filter(|p| (1..255).contains(&p.0[3])).collect();
        assert!(!edge.is_empty());
        for px in edge {
            let [r, g, b, a] = px.0;
            assert!(
                r.abs_diff(102) <= 2 && g.abs_diff(126) <= 2 && b.abs_diff(234) <= 2,
                "edge pixel darkened: {:?} at alpha {a}",
                (r, g, b),
            );
        }
    }

    #[test]
    fn white_edges_stay_white() {
        let image =
            fill_supersampled(&disc(16.0, 12.0), Color::white(), frame(32), &RenderSettings::default()).unwrap();
        let darkest = image.pixels().filter(|p| p.0[3] > 0).map(|p| p.0[0]).min().unwrap();
        assert!(darkest >= 253, "darkest edge channel {darkest}");
    }

    // ── fill_stamp ────────────────────────────────────────────────────────

    #[test]
    fn stamp_writes_exact_ink_with_hard_edges() {
        let ink = Color::from_rgba8(102, 126, 234, 80);
        let image = fill_stamp(&disc(4.5, 2.5), ink, frame(9)).unwrap();

        assert_eq!(image.get_pixel(4, 4).0, [102, 126, 234, 80]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0] || p.0 == [102, 126, 234, 80]));
    }
}

use resvg::tiny_skia::{Path, PathBuilder};

use crate::coords::{CornerRadii, Rect};
use crate::render::{Layer, RenderError, RenderSettings};
use crate::scene::RoundedRectCmd;

use super::common::fill_supersampled;

/// Cubic Bézier handle length for a quarter circle: 4/3 * tan(π/8).
const KAPPA: f32 = 0.552_284_8;

/// Renders `DrawCmd::RoundedRect` into a layer covering the rectangle.
///
/// The layer is exactly the rectangle's pixel frame; fractional positions are
/// kept inside the frame, so edges stay antialiased rather than snapped.
pub fn render_rounded_rect(
    cmd: &RoundedRectCmd,
    settings: &RenderSettings,
) -> Result<Option<Layer>, RenderError> {
    let rect = cmd.rect.normalized();
    if rect.is_empty() || !rect.is_finite() || cmd.color.is_transparent() {
        return Ok(None);
    }

    let frame = rect.pixel_frame();
    let origin = rect.origin - frame.origin();
    let local = Rect::new(origin.x, origin.y, rect.size.x, rect.size.y);

    let Some(path) = rounded_rect_path(local, cmd.radii) else {
        log::trace!("rounded_rect: degenerate path for {rect:?}");
        return Ok(None);
    };

    let image = fill_supersampled(&path, cmd.color, frame, settings)?;
    Ok(Some(Layer::at(frame, image)))
}

fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Option<Path> {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let r = radii.clamped_to(w, h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r.top_left, y);

    pb.line_to(x + w - r.top_right, y);
    if r.top_right > 0.0 {
        let k = r.top_right * KAPPA;
        pb.cubic_to(x + w - r.top_right + k, y, x + w, y + r.top_right - k, x + w, y + r.top_right);
    }

    pb.line_to(x + w, y + h - r.bottom_right);
    if r.bottom_right > 0.0 {
        let k = r.bottom_right * KAPPA;
        pb.cubic_to(
            x + w,
            y + h - r.bottom_right + k,
            x + w - r.bottom_right + k,
            y + h,
            x + w - r.bottom_right,
            y + h,
        );
    }

    pb.line_to(x + r.bottom_left, y + h);
    if r.bottom_left > 0.0 {
        let k = r.bottom_left * KAPPA;
        pb.cubic_to(x + r.bottom_left - k, y + h, x, y + h - r.bottom_left + k, x, y + h - r.bottom_left);
    }

    pb.line_to(x, y + r.top_left);
    if r.top_left > 0.0 {
        let k = r.top_left * KAPPA;
        pb.cubic_to(x, y + r.top_left - k, x + r.top_left - k, y, x + r.top_left, y);
    }

    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn opaque_rect(side: f32, radius: f32) -> RoundedRectCmd {
        RoundedRectCmd::new(Rect::square(side), CornerRadii::all(radius), Color::from_rgb8(15, 15, 26))
    }

    fn alpha(layer: &Layer, x: u32, y: u32) -> u8 {
        layer.image.get_pixel(x, y).0[3]
    }

    #[test]
    fn layer_matches_rect_frame() {
        let cmd = RoundedRectCmd::new(
            Rect::new(3.0, 5.0, 20.0, 10.0),
            CornerRadii::all(2.0),
            Color::white(),
        );
        let layer = render_rounded_rect(&cmd, &RenderSettings::default()).unwrap().unwrap();
        assert_eq!((layer.x, layer.y), (3, 5));
        assert_eq!(layer.image.dimensions(), (20, 10));
    }

    #[test]
    fn corners_are_cut_and_center_is_solid() {
        let layer = render_rounded_rect(&opaque_rect(32.0, 7.0), &RenderSettings::default())
            .unwrap()
            .unwrap();
        // Lanczos ringing may leave a trace, but the corner is clearly cut.
        assert!(alpha(&layer, 0, 0) < 32);
        assert!(alpha(&layer, 31, 31) < 32);
        assert_eq!(alpha(&layer, 16, 16), 255);
        assert_eq!(alpha(&layer, 16, 0), 255);
    }

    #[test]
    fn supersampling_produces_partial_edge_coverage_at_32px() {
        let layer = render_rounded_rect(&opaque_rect(32.0, 7.0), &RenderSettings::default())
            .unwrap()
            .unwrap();
        let partial = layer.image.pixels().filter(|p| p.0[3] > 0 && p.0[3] < 255).count();
        assert!(partial >= 8, "expected soft corner pixels, found {partial}");
    }

    #[test]
    fn aliased_settings_give_hard_edges() {
        let layer = render_rounded_rect(&opaque_rect(32.0, 7.0), &RenderSettings::aliased())
            .unwrap()
            .unwrap();
        assert!(layer.image.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
    }

    #[test]
    fn transparent_or_empty_rects_render_nothing() {
        let mut cmd = opaque_rect(10.0, 2.0);
        cmd.color = Color::transparent();
        assert!(render_rounded_rect(&cmd, &RenderSettings::default()).unwrap().is_none());

        let empty = RoundedRectCmd::new(Rect::new(0.0, 0.0, 0.0, 4.0), CornerRadii::all(1.0), Color::white());
        assert!(render_rounded_rect(&empty, &RenderSettings::default()).unwrap().is_none());
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_rounded_rect(&opaque_rect(48.0, 10.0), &RenderSettings::default()).unwrap();
        let b = render_rounded_rect(&opaque_rect(48.0, 10.0), &RenderSettings::default()).unwrap();
        assert_eq!(a, b);
    }
}

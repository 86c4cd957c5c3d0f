use resvg::tiny_skia::{LineCap, PathBuilder, Stroke, Transform};

use crate::render::effects::gaussian_blur;
use crate::render::{Layer, RenderError};
use crate::scene::LinesCmd;

use super::common::{new_pixmap, pixmap_to_image};

/// Renders `DrawCmd::Lines` into one layer covering `cmd.frame`.
///
/// Segments are stroked aliased, one pixel wide with square caps so both end
/// pixels are included, then the whole layer is blurred by `cmd.blur`.
pub fn render_lines(cmd: &LinesCmd) -> Result<Option<Layer>, RenderError> {
    let frame = cmd.frame.normalized().pixel_frame();
    if frame.is_empty() || cmd.segments.is_empty() {
        return Ok(None);
    }

    let mut pixmap = new_pixmap(frame.width, frame.height)?;
    let origin = frame.origin();
    let stroke = Stroke { width: 1.0, line_cap: LineCap::Square, ..Stroke::default() };

    for seg in cmd.segments.iter().filter(|s| !s.color.is_transparent()) {
        let (from, to) = (seg.from - origin, seg.to - origin);
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else { continue; };
        pixmap.stroke_path(&path, &seg.color.to_fill(), &stroke, Transform::identity(), None);
    }

    let image = gaussian_blur(&pixmap_to_image(&pixmap), cmd.blur);
    Ok(Some(Layer::at(frame, image)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::scene::LineSegment;

    fn row(x0: u32, x1: u32, y: u32, alpha: u8) -> LineSegment {
        LineSegment::between_pixels(x0, y, x1, y, Color::white().with_alpha(alpha))
    }

    #[test]
    fn unblurred_segment_covers_inclusive_span() {
        let cmd = LinesCmd { frame: Rect::square(16.0), segments: vec![row(3, 9, 5, 30)], blur: 0.0 };
        let layer = render_lines(&cmd).unwrap().unwrap();

        for x in 3..=9 {
            assert_eq!(layer.image.get_pixel(x, 5).0[3], 30, "x = {x}");
        }
        assert_eq!(layer.image.get_pixel(2, 5).0[3], 0);
        assert_eq!(layer.image.get_pixel(10, 5).0[3], 0);
        assert_eq!(layer.image.get_pixel(5, 4).0[3], 0);
    }

    #[test]
    fn blur_softens_rows_into_neighbours() {
        let cmd = LinesCmd { frame: Rect::square(16.0), segments: vec![row(3, 9, 8, 200)], blur: 2.0 };
        let layer = render_lines(&cmd).unwrap().unwrap();
        assert!(layer.image.get_pixel(6, 8).0[3] < 200);
        assert!(layer.image.get_pixel(6, 10).0[3] > 0);
    }

    #[test]
    fn empty_batch_renders_nothing() {
        let cmd = LinesCmd { frame: Rect::square(8.0), segments: Vec::new(), blur: 2.0 };
        assert!(render_lines(&cmd).unwrap().is_none());
    }
}

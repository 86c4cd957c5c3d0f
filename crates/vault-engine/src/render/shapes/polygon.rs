use resvg::tiny_skia::PathBuilder;

use crate::render::effects::glow_image;
use crate::render::{Layer, RenderError, RenderSettings};
use crate::scene::PolygonCmd;

use super::common::fill_supersampled;

/// Layers produced by one polygon, bottom first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonLayers {
    pub glow: Option<Layer>,
    pub fill: Layer,
}

impl PolygonLayers {
    /// Layers in compositing order.
    pub fn into_layers(self) -> impl Iterator<Item = Layer> {
        self.glow.into_iter().chain(std::iter::once(self.fill))
    }
}

/// Renders `DrawCmd::Polygon` into its frame.
///
/// The sharp fill is supersampled like every other filled shape. When the
/// command carries a visible glow, the downsampled fill is blurred and tinted
/// into a second layer at the same position, meant to be composited first.
pub fn render_polygon(
    cmd: &PolygonCmd,
    settings: &RenderSettings,
) -> Result<Option<PolygonLayers>, RenderError> {
    let frame = cmd.frame.normalized().pixel_frame();
    if frame.is_empty() || cmd.points.len() < 3 || cmd.color.is_transparent() {
        return Ok(None);
    }
    if !cmd.points.iter().all(|p| p.is_finite()) {
        log::debug!("polygon: skipping non-finite outline");
        return Ok(None);
    }

    let origin = frame.origin();
    let mut pb = PathBuilder::new();
    for (i, &point) in cmd.points.iter().enumerate() {
        let p = point - origin;
        if i == 0 {
            pb.move_to(p.x, p.y);
        } else {
            pb.line_to(p.x, p.y);
        }
    }
    pb.close();

    let Some(path) = pb.finish() else {
        log::trace!("polygon: degenerate outline in {frame:?}");
        return Ok(None);
    };

    let fill = fill_supersampled(&path, cmd.color, frame, settings)?;
    let glow = cmd
        .glow
        .filter(|g| g.is_visible())
        .map(|g| Layer::at(frame, glow_image(&fill, g)));

    Ok(Some(PolygonLayers { glow, fill: Layer::at(frame, fill) }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::Glow;

    const ACCENT: Color = Color::from_rgb8(102, 126, 234);

    fn triangle(glow: Option<Glow>) -> PolygonCmd {
        PolygonCmd::new(
            vec![Vec2::new(8.0, 8.0), Vec2::new(32.0, 8.0), Vec2::new(20.0, 32.0)],
            Rect::square(40.0),
            ACCENT,
            glow,
        )
    }

    #[test]
    fn fill_covers_interior_only() {
        let layers = render_polygon(&triangle(None), &RenderSettings::default()).unwrap().unwrap();
        assert!(layers.glow.is_none());
        assert_eq!(layers.fill.image.dimensions(), (40, 40));
        assert_eq!(layers.fill.image.get_pixel(20, 14).0, [102, 126, 234, 255]);
        assert_eq!(layers.fill.image.get_pixel(2, 38).0[3], 0);
    }

    #[test]
    fn glow_is_tinted_and_wider_than_fill() {
        let glow = Glow::new(ACCENT.with_alpha(180), 3.0);
        let layers = render_polygon(&triangle(Some(glow)), &RenderSettings::default())
            .unwrap()
            .unwrap();
        let halo = layers.glow.expect("glow layer");

        assert_eq!((halo.x, halo.y), (layers.fill.x, layers.fill.y));
        assert!(halo.image.pixels().filter(|p| p.0[3] > 0).all(|p| p.0[..3] == ACCENT.rgb()));

        let covered = |l: &Layer| l.image.pixels().filter(|p| p.0[3] > 0).count();
        assert!(covered(&halo) > covered(&layers.fill));
    }

    #[test]
    fn zero_radius_glow_is_dropped() {
        let layers = render_polygon(&triangle(Some(Glow::new(ACCENT, 0.0))), &RenderSettings::default())
            .unwrap()
            .unwrap();
        assert!(layers.glow.is_none());
    }

    #[test]
    fn into_layers_puts_glow_first() {
        let glow = Glow::new(ACCENT, 2.0);
        let layers = render_polygon(&triangle(Some(glow)), &RenderSettings::default())
            .unwrap()
            .unwrap();
        let expected_fill = layers.fill.clone();
        let ordered: Vec<Layer> = layers.into_layers().collect();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[1], expected_fill);
    }

    #[test]
    fn too_few_points_render_nothing() {
        let mut cmd = triangle(None);
        cmd.points.truncate(2);
        assert!(render_polygon(&cmd, &RenderSettings::default()).unwrap().is_none());
    }
}

use resvg::tiny_skia::PathBuilder;

use crate::coords::Rect;
use crate::paint::BlendMode;
use crate::render::{Layer, RenderError, RenderSettings};
use crate::scene::CircleCmd;

use super::common::{fill_stamp, fill_supersampled};

/// Renders `DrawCmd::Circle` into a layer covering its bounding square.
///
/// `Replace` circles skip supersampling: every covered pixel carries the exact color.
pub fn render_circle(cmd: &CircleCmd, settings: &RenderSettings) -> Result<Option<Layer>, RenderError> {
    if !(cmd.radius > 0.0) || !cmd.center.is_finite() || cmd.color.is_transparent() {
        return Ok(None);
    }

    let frame = Rect::centered_square(cmd.center, cmd.radius * 2.0).pixel_frame();
    let local = cmd.center - frame.origin();

    let Some(path) = PathBuilder::from_circle(local.x, local.y, cmd.radius) else {
        return Ok(None);
    };

    let image = match cmd.blend {
        BlendMode::SourceOver => fill_supersampled(&path, cmd.color, frame, settings)?,
        BlendMode::Replace => fill_stamp(&path, cmd.color, frame)?,
    };
    Ok(Some(Layer::at(frame, image).with_blend(cmd.blend)))
}

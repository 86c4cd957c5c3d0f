use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::lines::LinesCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command stream.
///
/// Every command renders into its own layer, which is then composited onto the
/// canvas with source-over blending.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Polygon(PolygonCmd),
    Circle(CircleCmd),
    Lines(LinesCmd),
}

impl DrawCmd {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Lines(_) => "lines",
        }
    }
}

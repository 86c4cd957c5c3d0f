//! Shape renderers.
//!
//! Each renderer turns one scene payload into a positioned [`Layer`]
//! (`None` when the payload covers nothing).
//!
//! [`Layer`]: crate::render::Layer

mod common;

pub mod circle;
pub mod lines;
pub mod polygon;
pub mod rounded_rect;

pub use circle::render_circle;
pub use lines::render_lines;
pub use polygon::{render_polygon, PolygonLayers};
pub use rounded_rect::render_rounded_rect;

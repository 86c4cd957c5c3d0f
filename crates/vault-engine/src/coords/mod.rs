//! Geometry types shared by the scene and the rasterizer.
//!
//! Canonical space:
//! - Canvas pixels (one unit per output pixel)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers scale into supersampled space with a transform; scene geometry is
//! always expressed at output resolution.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::{PixelFrame, Rect};
pub use vec2::Vec2;

//! CPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and produce one [`Layer`] per
//! command, which the [`Renderer`] composites onto a [`Canvas`] back-to-front.
//!
//! Convention:
//! - Scene geometry is in canvas pixels (top-left origin, +Y down).
//! - Filled shapes are rasterized at `RenderSettings::supersample` x scale via
//!   a transform, then downsampled to output resolution.

mod canvas;
mod ctx;
mod error;
mod renderer;

pub mod effects;
pub mod shapes;

use image::RgbaImage;

use crate::coords::PixelFrame;
use crate::paint::BlendMode;

pub use canvas::Canvas;
pub use ctx::RenderSettings;
pub use error::RenderError;
pub use renderer::Renderer;

/// A rendered command: straight-alpha pixels, their canvas position and how
/// they merge with the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub x: i64,
    pub y: i64,
    pub image: RgbaImage,
    pub blend: BlendMode,
}

impl Layer {
    #[inline]
    pub fn new(x: i64, y: i64, image: RgbaImage) -> Self {
        Self { x, y, image, blend: BlendMode::SourceOver }
    }

    #[inline]
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    #[inline]
    pub(crate) fn at(frame: PixelFrame, image: RgbaImage) -> Self {
        Self::new(frame.x, frame.y, image)
    }

    /// True when at least one pixel has non-zero alpha.
    pub fn has_coverage(&self) -> bool {
        self.image.pixels().any(|p| p.0[3] > 0)
    }
}

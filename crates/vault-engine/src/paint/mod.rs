//! Paint model shared between the scene and the rasterizer.
//!
//! Every shape is filled with a single straight-alpha color and merged with a
//! [`BlendMode`]. Geometry types remain in `coords`.

pub mod blend;
pub mod color;

pub use blend::BlendMode;
pub use color::Color;

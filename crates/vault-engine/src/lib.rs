//! Vault engine crate.
//!
//! A small CPU drawing stack: record shapes into a [`scene::DrawList`], then
//! let a [`render::Renderer`] rasterize and composite them into an RGBA image.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

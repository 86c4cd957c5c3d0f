//! Logo composition: geometry + style -> draw list -> RGBA image.

use image::RgbaImage;
use vault_engine::render::{RenderError, Renderer};
use vault_engine::scene::{DrawList, Glow};

use crate::geometry::{LogoGeometry, HIGHLIGHT_BLUR};
use crate::style::LogoStyle;

/// Z-layers, back to front.
pub mod layers {
    use vault_engine::scene::ZIndex;

    pub const OUTER_PANEL: ZIndex = ZIndex::new(0);
    pub const INNER_PANEL: ZIndex = ZIndex::new(1);
    /// The glyph's glow is emitted with the glyph and composited beneath it.
    pub const GLYPH: ZIndex = ZIndex::new(2);
    pub const DOTS: ZIndex = ZIndex::new(3);
    pub const HIGHLIGHT: ZIndex = ZIndex::new(4);
}

/// Records every logo part for `geometry` into a draw list.
pub fn build_scene(geometry: &LogoGeometry, style: &LogoStyle) -> DrawList {
    let mut list = DrawList::new();

    list.push_uniform_rounded_rect(
        layers::OUTER_PANEL,
        geometry.outer_panel(),
        geometry.outer_radius as f32,
        style.outer_panel,
    );
    list.push_uniform_rounded_rect(
        layers::INNER_PANEL,
        geometry.inner_panel(),
        geometry.inner_radius as f32,
        style.inner_panel,
    );

    let glyph = &geometry.glyph;
    list.push_polygon(
        layers::GLYPH,
        glyph.outline(),
        glyph.frame(),
        style.glyph,
        Some(Glow::new(style.glow, glyph.glow_radius as f32)),
    );

    if let Some(dots) = &geometry.dots {
        for center in dots.centers() {
            list.push_stamped_circle(layers::DOTS, center, dots.fill_radius(), style.dot);
        }
    }

    if let Some(highlight) = &geometry.highlight {
        list.push_lines(
            layers::HIGHLIGHT,
            geometry.canvas(),
            highlight.segments(style.highlight, style.highlight_peak_alpha),
            HIGHLIGHT_BLUR,
        );
    }

    list
}

/// Renders the logo at `size` x `size` with the default style and 4x supersampling.
pub fn compose_logo(size: u32) -> Result<RgbaImage, RenderError> {
    compose_logo_with(size, &LogoStyle::default(), &Renderer::default())
}

/// Renders the logo at `size` x `size` with an explicit style and renderer.
pub fn compose_logo_with(size: u32, style: &LogoStyle, renderer: &Renderer) -> Result<RgbaImage, RenderError> {
    let geometry = LogoGeometry::for_size(size);
    let scene = build_scene(&geometry, style);
    log::debug!("composing {size}px logo from {} draw items", scene.len());
    Ok(renderer.render(&scene, size, size)?.into_image())
}

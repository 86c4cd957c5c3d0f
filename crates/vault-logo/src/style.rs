use vault_engine::paint::Color;

/// Accent blue, `#667eea`.
pub const ACCENT: Color = Color::from_rgb8(102, 126, 234);

/// Fill colors for every part of the logo.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LogoStyle {
    pub outer_panel: Color,
    pub inner_panel: Color,
    pub glyph: Color,
    /// Only the RGB channels tint the glow; its coverage comes from the blur.
    pub glow: Color,
    pub dot: Color,
    pub highlight: Color,
    /// Alpha of the first highlight row; later rows fade toward zero.
    pub highlight_peak_alpha: u8,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            outer_panel: Color::from_rgb8(15, 15, 26),
            inner_panel: Color::from_rgb8(22, 22, 40),
            glyph: ACCENT,
            glow: ACCENT.with_alpha(180),
            dot: ACCENT.with_alpha(80),
            highlight: Color::white(),
            highlight_peak_alpha: 30,
        }
    }
}

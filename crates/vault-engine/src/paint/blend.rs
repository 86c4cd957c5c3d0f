/// How a rendered layer is merged into the pixels already on the canvas.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Porter-Duff source-over.
    #[default]
    SourceOver,
    /// Covered pixels are overwritten with the layer's pixels, alpha included.
    Replace,
}

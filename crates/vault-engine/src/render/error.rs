use std::fmt;

/// Failure while rasterizing or compositing a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Requested canvas has a zero or unrepresentable dimension.
    InvalidSize { width: u32, height: u32 },
    /// The raster backend could not allocate a surface of this size.
    PixmapAllocation { width: u32, height: u32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSize { width, height } => {
                write!(f, "invalid canvas size {width}x{height}")
            }
            RenderError::PixmapAllocation { width, height } => {
                write!(f, "failed to allocate {width}x{height} raster surface")
            }
        }
    }
}

impl std::error::Error for RenderError {}

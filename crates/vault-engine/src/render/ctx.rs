use image::imageops::FilterType;

/// Rasterization policy shared by every shape renderer.
///
/// Filled shapes are rasterized without backend antialiasing at
/// `supersample` x the output resolution and then downsampled with `filter`.
/// A factor of 1 disables supersampling (hard edges).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    pub supersample: u32,
    pub filter: FilterType,
}

impl RenderSettings {
    pub const DEFAULT_SUPERSAMPLE: u32 = 4;

    #[inline]
    pub fn new(supersample: u32, filter: FilterType) -> Self {
        Self { supersample: supersample.max(1), filter }
    }

    /// Hard-edged rasterization, mainly useful for exact-pixel tests.
    #[inline]
    pub fn aliased() -> Self {
        Self::new(1, FilterType::Nearest)
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SUPERSAMPLE, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_4x_lanczos() {
        let s = RenderSettings::default();
        assert_eq!(s.supersample, 4);
        assert_eq!(s.filter, FilterType::Lanczos3);
    }

    #[test]
    fn zero_supersample_is_raised_to_one() {
        assert_eq!(RenderSettings::new(0, FilterType::Triangle).supersample, 1);
    }
}

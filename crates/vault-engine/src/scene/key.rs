/// Z-ordering key for draw items.
///
/// Higher values are composited on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key for draw items.
///
/// Field order drives the derived ordering:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Insertion index across the whole list.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        let back = SortKey::new(ZIndex::new(0), 7);
        let front = SortKey::new(ZIndex::new(1), 0);
        assert!(back < front);
    }

    #[test]
    fn equal_z_falls_back_to_insertion_order() {
        let first = SortKey::new(ZIndex::new(3), 1);
        let second = SortKey::new(ZIndex::new(3), 2);
        assert!(first < second);
    }
}

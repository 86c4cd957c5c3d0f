use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one image.
///
/// `push()` is O(1); paint order is resolved lazily when the list is walked.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });
    }

    /// Keeps only the items for which `keep` returns `true`.
    ///
    /// Sort keys of the surviving items are unchanged.
    pub fn retain(&mut self, keep: impl FnMut(&DrawItem) -> bool) {
        self.items.retain(keep);
    }

    /// Iterates items back-to-front without cloning draw commands.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &DrawItem> {
        let mut ordered: Vec<&DrawItem> = self.items.iter().collect();
        // Keys are unique (insertion order is part of them), so an unstable sort is deterministic.
        ordered.sort_unstable_by_key(|item| item.key);
        ordered.into_iter()
    }
}

use super::ZIndex;

/// Paint-order key: layer first, then insertion order within the layer.
///
/// Field order matters; the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
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
    fn layer_dominates_insertion_order() {
        let early_top = SortKey::new(ZIndex(100), 0);
        let late_bottom = SortKey::new(ZIndex(0), 50);
        assert!(late_bottom < early_top);
    }

    #[test]
    fn insertion_breaks_ties() {
        assert!(SortKey::new(ZIndex(10), 1) < SortKey::new(ZIndex(10), 2));
    }
}

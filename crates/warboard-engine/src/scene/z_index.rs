use core::cmp::Ordering;

/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Quantizes a world depth into a layer, one layer per hundredth of a unit.
    ///
    /// Depths closer than that collapse into one layer and fall back to
    /// insertion order.
    #[inline]
    pub fn from_depth(depth: f32) -> Self {
        Self((depth * 100.0).round() as i32)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_layers_keep_table_order() {
        // board < grid < terrain < plates
        let board = ZIndex::from_depth(0.0);
        let grid = ZIndex::from_depth(0.01);
        let terrain = ZIndex::from_depth(0.1);
        let plate = ZIndex::from_depth(1.0);
        assert!(board < grid && grid < terrain && terrain < plate);
    }
}

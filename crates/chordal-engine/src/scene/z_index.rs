/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values. The capture tool only needs
/// three layers, named below; hosts can slot their own decor in between.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Background decor (axes).
    pub const AXES: ZIndex = ZIndex(0);
    /// Committed and preview shapes.
    pub const SHAPES: ZIndex = ZIndex(10);
    /// Intersection markers, always on top.
    pub const MARKERS: ZIndex = ZIndex(20);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Paint-order key for draw items: z-layer first, insertion order second.
///
/// The derived ordering is lexicographic over the declared fields, which is
/// exactly the back-to-front rule: lower layers paint first, FIFO within a
/// layer.
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

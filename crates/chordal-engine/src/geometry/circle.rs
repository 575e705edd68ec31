use crate::coords::Vec2;

/// Circle in NDC. Radius is non-negative; a radius-0 circle is a valid
/// degenerate commit (a click without a drag).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "Circle::new: negative radius {radius}");
        Self { center, radius }
    }

    /// Circle through `center` and a point on its boundary.
    #[inline]
    pub fn from_center_and_edge(center: Vec2, edge: Vec2) -> Self {
        Self::new(center, center.distance(edge))
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.radius <= 0.0
    }
}

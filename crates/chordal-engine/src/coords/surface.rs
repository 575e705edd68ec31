use super::Vec2;

/// Drawing-surface size in surface-local pixels.
///
/// The capture core never stores pixel coordinates; hosts hand the current
/// surface size alongside raw pointer positions and everything downstream
/// works in NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a surface-local pixel position to normalized device coordinates.
    ///
    /// Pixel space has its origin top-left with +Y down; NDC has its origin
    /// at the center with +Y up, so the Y axis is flipped:
    /// `(2x/W - 1, -(2y/H - 1))`. The Y term is written as `1 - 2y/H` so the
    /// surface midline maps to +0.0, keeping formatted coordinates sign-free.
    #[inline]
    pub fn to_ndc(self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x / self.width) * 2.0 - 1.0, 1.0 - (y / self.height) * 2.0)
    }
}

use crate::coords::Vec2;

/// Line segment in NDC. A zero-length segment is a valid degenerate commit.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Direction vector `end - start` (not normalized).
    #[inline]
    pub fn delta(self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.delta().length()
    }

    /// Point at parameter `t` along the segment (`t = 0` start, `t = 1` end).
    #[inline]
    pub fn point_at(self, t: f32) -> Vec2 {
        self.start + self.delta() * t
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_endpoints() {
        let s = Segment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.5));
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);
    }

    #[test]
    fn point_at_midpoint() {
        let s = Segment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert_eq!(s.point_at(0.5), Vec2::zero());
    }
}

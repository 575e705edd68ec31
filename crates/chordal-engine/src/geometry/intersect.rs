use crate::coords::Vec2;

use super::{Circle, Segment};

/// Ordered crossing points between a segment and a circle boundary.
///
/// Ordering follows the segment parameter: the point nearer `start` comes
/// first. Holds at most two points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionSet {
    points: Vec<Vec2>,
}

impl IntersectionSet {
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, p: Vec2) {
        debug_assert!(self.points.len() < 2, "IntersectionSet holds at most two points");
        self.points.push(p);
    }
}

/// Computes where `segment` crosses the boundary of `circle`.
///
/// Parametric form `start + t * (end - start)` substituted into the circle
/// equation gives the quadratic `a*t^2 + b*t + c = 0` with
/// `a = d.d`, `b = 2(f.d)`, `c = f.f - r^2` where `d = end - start` and
/// `f = start - center`. Roots are kept only when `0 <= t <= 1`, so hits
/// beyond the endpoints of the *segment* are discarded even when the
/// infinite line would cross.
///
/// Edge cases:
/// - zero-length segment (`a = 0`): no crossing, avoids the division
/// - negative discriminant: no crossing
/// - exact tangency (`t1 == t2`): a single point, not a coincident pair
pub fn segment_circle_intersections(segment: Segment, circle: Circle) -> IntersectionSet {
    let mut set = IntersectionSet::default();

    let d = segment.delta();
    let f = segment.start - circle.center;

    let a = d.dot(d);
    if a == 0.0 {
        return set;
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - circle.radius * circle.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return set;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    if (0.0..=1.0).contains(&t1) {
        set.push(segment.point_at(t1));
    }
    // Tangency collapses both roots onto one point; emit it once.
    if t2 != t1 && (0.0..=1.0).contains(&t2) {
        set.push(segment.point_at(t2));
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_circle() -> Circle {
        Circle::new(Vec2::zero(), 1.0)
    }

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    // ── two crossings ─────────────────────────────────────────────────────

    #[test]
    fn diameter_crossing_yields_two_ordered_points() {
        let set = segment_circle_intersections(seg(-2.0, 0.0, 2.0, 0.0), unit_circle());
        assert_eq!(set.points(), &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)]);
    }

    #[test]
    fn ordering_follows_segment_direction() {
        // Same chord walked the other way: nearer-to-start point still first.
        let set = segment_circle_intersections(seg(2.0, 0.0, -2.0, 0.0), unit_circle());
        assert_eq!(set.points(), &[Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)]);
    }

    // ── zero or one crossing ──────────────────────────────────────────────

    #[test]
    fn segment_outside_on_crossing_line_yields_none() {
        // Infinite line crosses, both roots fall outside [0, 1].
        let set = segment_circle_intersections(seg(2.0, 0.0, 3.0, 0.0), unit_circle());
        assert!(set.is_empty());
    }

    #[test]
    fn segment_fully_inside_yields_none() {
        let set = segment_circle_intersections(seg(-0.5, 0.0, 0.5, 0.0), unit_circle());
        assert!(set.is_empty());
    }

    #[test]
    fn segment_ending_inside_yields_entry_point_only() {
        let set = segment_circle_intersections(seg(-2.0, 0.0, 0.0, 0.0), unit_circle());
        assert_eq!(set.points(), &[Vec2::new(-1.0, 0.0)]);
    }

    #[test]
    fn miss_yields_none() {
        let set = segment_circle_intersections(seg(-2.0, 2.0, 2.0, 2.0), unit_circle());
        assert!(set.is_empty());
    }

    // ── tangency and degeneracy ───────────────────────────────────────────

    #[test]
    fn tangent_yields_single_point() {
        let set = segment_circle_intersections(seg(-1.0, 1.0, 1.0, 1.0), unit_circle());
        assert_eq!(set.points(), &[Vec2::new(0.0, 1.0)]);
    }

    #[test]
    fn zero_length_segment_yields_none() {
        // Even a point sitting exactly on the boundary: degenerate input.
        let set = segment_circle_intersections(seg(1.0, 0.0, 1.0, 0.0), unit_circle());
        assert!(set.is_empty());
    }

    #[test]
    fn zero_radius_circle_on_segment_line() {
        let circle = Circle::new(Vec2::zero(), 0.0);
        let set = segment_circle_intersections(seg(-1.0, 0.0, 1.0, 0.0), circle);
        // Tangent root at the center, emitted once.
        assert_eq!(set.points(), &[Vec2::zero()]);
    }

    #[test]
    fn solver_is_idempotent() {
        let s = seg(-2.0, 0.3, 2.0, 0.3);
        let a = segment_circle_intersections(s, unit_circle());
        let b = segment_circle_intersections(s, unit_circle());
        assert_eq!(a, b);
    }
}

use crate::coords::Vec2;
use crate::geometry::Circle;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle-outline draw payload.
///
/// Outline only; the capture tool never fills circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOutlineCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleOutlineCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records a circle-outline draw command.
    #[inline]
    pub fn push_circle_outline(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::CircleOutline(CircleOutlineCmd::new(center, radius, color)));
    }

    /// Records a committed or preview [`Circle`].
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, circle: Circle, color: Color) {
        self.push_circle_outline(z, circle.center, circle.radius, color);
    }
}

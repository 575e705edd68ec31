use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Point-marker draw payload (intersection highlights).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerCmd {
    pub position: Vec2,
    pub color: Color,
}

impl MarkerCmd {
    #[inline]
    pub fn new(position: Vec2, color: Color) -> Self {
        Self { position, color }
    }
}

impl DrawList {
    /// Records a point-marker draw command.
    #[inline]
    pub fn push_marker(&mut self, z: ZIndex, position: Vec2, color: Color) {
        self.push(z, DrawCmd::Marker(MarkerCmd::new(position, color)));
    }
}

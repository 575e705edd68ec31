use crate::coords::Vec2;
use crate::geometry::Segment;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Line-segment draw payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

impl SegmentCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, color: Color) -> Self {
        Self { start, end, color }
    }
}

impl DrawList {
    /// Records a line-segment draw command.
    #[inline]
    pub fn push_segment_points(&mut self, z: ZIndex, start: Vec2, end: Vec2, color: Color) {
        self.push(z, DrawCmd::Segment(SegmentCmd::new(start, end, color)));
    }

    /// Records a committed or preview [`Segment`].
    #[inline]
    pub fn push_segment(&mut self, z: ZIndex, segment: Segment, color: Color) {
        self.push_segment_points(z, segment.start, segment.end, color);
    }
}

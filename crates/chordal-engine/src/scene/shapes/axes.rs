use crate::coords::Vec2;
use crate::paint::Palette;
use crate::scene::{DrawList, ZIndex};

/// Default half-extent of the centered coordinate axes.
pub const AXES_EXTENT: f32 = 0.85;

impl DrawList {
    /// Records centered x/y axes beneath all shapes.
    ///
    /// `extent` is the half-length of each axis in NDC.
    pub fn push_axes(&mut self, extent: f32, palette: &Palette) {
        self.push_segment_points(
            ZIndex::AXES,
            Vec2::new(-extent, 0.0),
            Vec2::new(extent, 0.0),
            palette.axis_x,
        );
        self.push_segment_points(
            ZIndex::AXES,
            Vec2::new(0.0, -extent),
            Vec2::new(0.0, extent),
            palette.axis_y,
        );
    }
}

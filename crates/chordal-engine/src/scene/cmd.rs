use crate::scene::shapes::circle::CircleOutlineCmd;
use crate::scene::shapes::marker::MarkerCmd;
use crate::scene::shapes::segment::SegmentCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    CircleOutline(CircleOutlineCmd),
    Segment(SegmentCmd),
    Marker(MarkerCmd),
}

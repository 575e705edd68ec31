//! Shape payloads and their `DrawList` push helpers, one file per shape.

pub mod axes;
pub mod circle;
pub mod marker;
pub mod segment;

pub use circle::CircleOutlineCmd;
pub use marker::MarkerCmd;
pub use segment::SegmentCmd;

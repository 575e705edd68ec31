//! Geometric primitives and the segment/circle intersection solver.
//!
//! Responsibilities:
//! - committed-shape types (`Circle`, `Segment`) in NDC
//! - the closed-form solver producing an ordered [`IntersectionSet`]
//!
//! Degenerate shapes (radius 0, zero-length segments) are valid inputs
//! everywhere in this module, never errors.

mod circle;
mod intersect;
mod segment;

pub use circle::Circle;
pub use intersect::{IntersectionSet, segment_circle_intersections};
pub use segment::Segment;

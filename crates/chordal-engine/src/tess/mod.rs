//! CPU-side tessellation of scene commands into vertex buffers.
//!
//! Hosts that upload geometry (GPU line lists, point sprites) get flat
//! vertex data here; hosts with retained-mode painters can ignore this
//! module and walk the scene directly.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::geometry::{Circle, Segment};

/// Number of polyline segments used for circle outlines by default.
pub const CIRCLE_SEGMENTS: usize = 128;

/// A single 2D vertex in NDC, laid out for direct buffer upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl From<Vec2> for Vertex {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self { pos: [v.x, v.y] }
    }
}

/// Reinterprets a vertex slice as raw bytes for buffer upload.
#[inline]
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Tessellates a circle outline as a closed polyline with `segments` points.
///
/// Intended for line-loop style drawing: consecutive vertices are joined and
/// the host closes the loop back to the first vertex.
pub fn circle_outline(circle: Circle, segments: usize) -> Vec<Vertex> {
    debug_assert!(segments >= 3, "circle outline needs at least 3 segments");

    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vertex {
                pos: [
                    circle.center.x + circle.radius * angle.cos(),
                    circle.center.y + circle.radius * angle.sin(),
                ],
            }
        })
        .collect()
}

/// Vertex pair for a line segment.
#[inline]
pub fn segment_vertices(segment: Segment) -> [Vertex; 2] {
    [segment.start.into(), segment.end.into()]
}

/// Single vertex for a point marker.
#[inline]
pub fn marker_vertex(position: Vec2) -> Vertex {
    position.into()
}

//! Text overlay collaborator.
//!
//! The capture core reports committed shapes as human-readable lines through
//! the [`TextSlots`] trait; slot rendering (HUD, console, toolkit label) is
//! the host's concern. Coordinates are always formatted to two decimals.

use crate::capture::CaptureCommit;
use crate::geometry::{Circle, IntersectionSet, Segment};

/// Slot index for the circle description.
pub const SLOT_CIRCLE: usize = 0;
/// Slot index for the segment description.
pub const SLOT_SEGMENT: usize = 1;
/// Slot index for the intersection summary.
pub const SLOT_INTERSECTIONS: usize = 2;

/// Text-display collaborator: "set the text of slot N to S".
pub trait TextSlots {
    fn set_slot(&mut self, slot: usize, text: String);
}

/// In-memory `TextSlots` implementation, also used by tests.
#[derive(Debug, Default)]
pub struct OverlayBuffer {
    slots: Vec<Option<String>>,
}

impl OverlayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    /// Occupied slots in index order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|s| (i, s)))
    }
}

impl TextSlots for OverlayBuffer {
    fn set_slot(&mut self, slot: usize, text: String) {
        if self.slots.len() <= slot {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(text);
    }
}

/// Writes the description of a commit into its slot(s).
///
/// A segment commit also fills the intersection slot, matching the moment
/// the intersection set first becomes valid.
pub fn report_commit(commit: &CaptureCommit, slots: &mut dyn TextSlots) {
    match commit {
        CaptureCommit::Circle(circle) => {
            slots.set_slot(SLOT_CIRCLE, describe_circle(*circle));
        }
        CaptureCommit::Segment { segment, intersections } => {
            slots.set_slot(SLOT_SEGMENT, describe_segment(*segment));
            slots.set_slot(SLOT_INTERSECTIONS, describe_intersections(intersections));
        }
    }
}

pub fn describe_circle(circle: Circle) -> String {
    format!(
        "Circle : center ({:.2}, {:.2}) radius = {:.2}",
        circle.center.x, circle.center.y, circle.radius
    )
}

pub fn describe_segment(segment: Segment) -> String {
    format!(
        "Line segment: ({:.2}, {:.2}) ~ ({:.2}, {:.2})",
        segment.start.x, segment.start.y, segment.end.x, segment.end.y
    )
}

pub fn describe_intersections(set: &IntersectionSet) -> String {
    if set.is_empty() {
        return "No intersection".to_string();
    }

    let mut text = format!("Intersection Points: {}", set.len());
    for (i, p) in set.points().iter().enumerate() {
        text.push_str(&format!(" Point {}: ({:.2}, {:.2})", i + 1, p.x, p.y));
    }
    text
}

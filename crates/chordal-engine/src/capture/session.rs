use crate::coords::Vec2;
use crate::geometry::{Circle, IntersectionSet, Segment, segment_circle_intersections};
use crate::paint::Palette;
use crate::scene::{DrawList, ZIndex};

/// Where a capture session currently stands.
///
/// Transient drag data lives inside the variant, so an invalid combination
/// like "dragging a segment before the circle exists" cannot be represented.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CapturePhase {
    /// Nothing captured yet.
    Idle,
    /// Primary button held; dragging out the circle radius.
    ///
    /// `edge` is the last pointer position, initially equal to `center` so a
    /// click without movement commits a radius-0 circle.
    DraggingCircle { center: Vec2, edge: Vec2 },
    /// Circle committed; waiting for the segment drag to start.
    CircleDone,
    /// Primary button held; dragging out the segment.
    DraggingLine { start: Vec2, end: Vec2 },
    /// Both shapes committed. Further pointer input is ignored.
    Complete,
}

/// A shape finalized by a pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureCommit {
    Circle(Circle),
    Segment {
        segment: Segment,
        intersections: IntersectionSet,
    },
}

/// One interactive capture session: a circle, then a segment, then their
/// intersections.
///
/// All positions entering this type are NDC; the session never sees pixels.
/// Handlers are synchronous and run to completion, so there is no partially
/// applied event to observe.
#[derive(Debug)]
pub struct CaptureSession {
    phase: CapturePhase,
    circle: Option<Circle>,
    segment: Option<Segment>,
    intersections: IntersectionSet,
    redraw_needed: bool,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            phase: CapturePhase::Idle,
            circle: None,
            segment: None,
            intersections: IntersectionSet::default(),
            redraw_needed: true,
        }
    }

    #[inline]
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Committed circle, if the first drag has finished.
    #[inline]
    pub fn circle(&self) -> Option<Circle> {
        self.circle
    }

    /// Committed segment, if the second drag has finished.
    #[inline]
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    /// Intersections of the committed shapes. Empty until both exist.
    #[inline]
    pub fn intersections(&self) -> &IntersectionSet {
        &self.intersections
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, CapturePhase::Complete)
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_needed)
    }

    /// Primary-button press at `pos`.
    pub fn pointer_down(&mut self, pos: Vec2) {
        match self.phase {
            CapturePhase::Idle => {
                self.phase = CapturePhase::DraggingCircle { center: pos, edge: pos };
                self.redraw_needed = true;
                log::debug!("capture: circle drag started at ({:.2}, {:.2})", pos.x, pos.y);
            }
            CapturePhase::CircleDone => {
                self.phase = CapturePhase::DraggingLine { start: pos, end: pos };
                self.redraw_needed = true;
                log::debug!("capture: segment drag started at ({:.2}, {:.2})", pos.x, pos.y);
            }
            // A press during an active drag cannot happen for a single
            // button; Complete ignores everything.
            CapturePhase::DraggingCircle { .. }
            | CapturePhase::DraggingLine { .. }
            | CapturePhase::Complete => {}
        }
    }

    /// Pointer motion to `pos`. Ignored unless a drag is active.
    pub fn pointer_move(&mut self, pos: Vec2) {
        match &mut self.phase {
            CapturePhase::DraggingCircle { edge, .. } => {
                *edge = pos;
                self.redraw_needed = true;
            }
            CapturePhase::DraggingLine { end, .. } => {
                *end = pos;
                self.redraw_needed = true;
            }
            CapturePhase::Idle | CapturePhase::CircleDone | CapturePhase::Complete => {}
        }
    }

    /// Primary-button release. Commits the active drag, if any.
    ///
    /// The committed shape uses the last pointer position recorded by
    /// [`pointer_move`]; a release without any prior motion commits the
    /// degenerate shape at the press position.
    pub fn pointer_up(&mut self) -> Option<CaptureCommit> {
        match self.phase {
            CapturePhase::DraggingCircle { center, edge } => {
                let circle = Circle::from_center_and_edge(center, edge);
                self.circle = Some(circle);
                self.phase = CapturePhase::CircleDone;
                self.redraw_needed = true;
                log::debug!(
                    "capture: circle committed, center ({:.2}, {:.2}) radius {:.2}",
                    circle.center.x,
                    circle.center.y,
                    circle.radius
                );
                Some(CaptureCommit::Circle(circle))
            }
            CapturePhase::DraggingLine { start, end } => {
                let segment = Segment::new(start, end);
                let circle = self
                    .circle
                    .expect("DraggingLine is only reachable after a circle commit");
                let intersections = segment_circle_intersections(segment, circle);

                self.segment = Some(segment);
                self.intersections = intersections.clone();
                self.phase = CapturePhase::Complete;
                self.redraw_needed = true;
                log::debug!(
                    "capture: segment committed, {} intersection(s)",
                    intersections.len()
                );
                Some(CaptureCommit::Segment { segment, intersections })
            }
            CapturePhase::Idle | CapturePhase::CircleDone | CapturePhase::Complete => None,
        }
    }

    /// Records the current snapshot into `list`.
    ///
    /// Previews use `palette.preview`; committed shapes and markers use their
    /// accent colors. The caller owns clearing and any background decor.
    pub fn record_scene(&self, list: &mut DrawList, palette: &Palette) {
        match self.phase {
            CapturePhase::DraggingCircle { center, edge } => {
                list.push_circle_outline(
                    ZIndex::SHAPES,
                    center,
                    center.distance(edge),
                    palette.preview,
                );
            }
            CapturePhase::DraggingLine { start, end } => {
                list.push_segment_points(ZIndex::SHAPES, start, end, palette.preview);
            }
            CapturePhase::Idle | CapturePhase::CircleDone | CapturePhase::Complete => {}
        }

        if let Some(circle) = self.circle {
            list.push_circle(ZIndex::SHAPES, circle, palette.circle);
        }
        if let Some(segment) = self.segment {
            list.push_segment(ZIndex::SHAPES, segment, palette.segment);
        }
        for &p in self.intersections.points() {
            list.push_marker(ZIndex::MARKERS, p, palette.marker);
        }
    }
}

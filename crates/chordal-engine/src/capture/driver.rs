use crate::coords::SurfaceSize;
use crate::input::{
    InputEvent, InputFrame, InputState, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
use crate::overlay::{self, TextSlots};

use super::session::{CaptureCommit, CaptureSession};

/// Drives a [`CaptureSession`] from platform-agnostic input events.
///
/// The driver owns the session plus the input bookkeeping needed for the
/// drag guard: pointer motion only reaches the state machine while the
/// primary button is held, and only the primary button starts or commits
/// drags. Raw pixel positions are normalized against the surface size given
/// per event, so live resizes keep coordinate parity with rendering.
#[derive(Debug, Default)]
pub struct CaptureDriver {
    session: CaptureSession,
    input: InputState,
    frame: InputFrame,
}

impl CaptureDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    #[inline]
    pub fn session_mut(&mut self) -> &mut CaptureSession {
        &mut self.session
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Clears per-frame input deltas. Call once per host frame.
    pub fn end_frame(&mut self) {
        self.frame.clear();
    }

    /// Feeds one event through the guard into the state machine.
    ///
    /// On commit the shape description is written to `slots` (and, after the
    /// segment commit, the intersection summary). Returns the commit so the
    /// host can react beyond the overlay.
    pub fn handle_event(
        &mut self,
        surface: SurfaceSize,
        ev: InputEvent,
        slots: &mut dyn TextSlots,
    ) -> Option<CaptureCommit> {
        self.input.apply_event(&mut self.frame, ev);

        let commit = match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
                ..
            }) => {
                self.session.pointer_down(surface.to_ndc(x, y));
                None
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                ..
            }) => self.session.pointer_up(),

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                // Guard: motion with the button up is hover, not a drag.
                if self.input.button_down(MouseButton::Left) {
                    self.session.pointer_move(surface.to_ndc(x, y));
                }
                None
            }

            // Secondary buttons, focus and leave events update InputState
            // only; the capture machine never sees them.
            _ => None,
        };

        if let Some(commit) = &commit {
            overlay::report_commit(commit, slots);
        }

        commit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CapturePhase;
    use crate::coords::Vec2;
    use crate::input::Modifiers;
    use crate::overlay::OverlayBuffer;

    const SURFACE: SurfaceSize = SurfaceSize::new(700.0, 700.0);

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn drag_from_center_commits_normalized_circle() {
        let mut driver = CaptureDriver::new();
        let mut slots = OverlayBuffer::default();

        driver.handle_event(SURFACE, button(MouseButton::Left, MouseButtonState::Pressed, 350.0, 350.0), &mut slots);
        driver.handle_event(SURFACE, moved(700.0, 350.0), &mut slots);
        let commit = driver.handle_event(
            SURFACE,
            button(MouseButton::Left, MouseButtonState::Released, 700.0, 350.0),
            &mut slots,
        );

        let Some(CaptureCommit::Circle(c)) = commit else {
            panic!("expected circle commit, got {commit:?}");
        };
        assert_eq!(c.center, Vec2::zero());
        assert_eq!(c.radius, 1.0);
        assert_eq!(slots.get(0), Some("Circle : center (0.00, 0.00) radius = 1.00"));
    }

    #[test]
    fn hover_motion_does_not_drag() {
        let mut driver = CaptureDriver::new();
        let mut slots = OverlayBuffer::default();

        driver.handle_event(SURFACE, moved(100.0, 100.0), &mut slots);
        assert_eq!(driver.session().phase(), CapturePhase::Idle);
    }

    #[test]
    fn secondary_button_does_not_start_a_drag() {
        let mut driver = CaptureDriver::new();
        let mut slots = OverlayBuffer::default();

        driver.handle_event(SURFACE, button(MouseButton::Right, MouseButtonState::Pressed, 350.0, 350.0), &mut slots);
        assert_eq!(driver.session().phase(), CapturePhase::Idle);
    }

    #[test]
    fn full_session_reports_intersections() {
        let mut driver = CaptureDriver::new();
        let mut slots = OverlayBuffer::default();

        // Circle: center of the surface, radius 1 (dragged to the right edge).
        driver.handle_event(SURFACE, button(MouseButton::Left, MouseButtonState::Pressed, 350.0, 350.0), &mut slots);
        driver.handle_event(SURFACE, moved(700.0, 350.0), &mut slots);
        driver.handle_event(SURFACE, button(MouseButton::Left, MouseButtonState::Released, 700.0, 350.0), &mut slots);

        // Segment: horizontal through the center, edge to edge.
        driver.handle_event(SURFACE, button(MouseButton::Left, MouseButtonState::Pressed, 0.0, 350.0), &mut slots);
        driver.handle_event(SURFACE, moved(700.0, 350.0), &mut slots);
        let commit = driver.handle_event(
            SURFACE,
            button(MouseButton::Left, MouseButtonState::Released, 700.0, 350.0),
            &mut slots,
        );

        let Some(CaptureCommit::Segment { intersections, .. }) = commit else {
            panic!("expected segment commit");
        };
        assert_eq!(
            intersections.points(),
            &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)]
        );
        assert_eq!(
            slots.get(2),
            Some("Intersection Points: 2 Point 1: (-1.00, 0.00) Point 2: (1.00, 0.00)")
        );
    }
}

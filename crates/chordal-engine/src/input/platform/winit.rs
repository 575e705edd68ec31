use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::ModifiersState;

use crate::input::{
    InputEvent, InputState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's current DPI scale; pointer positions are
/// converted from physical to logical pixels with it, matching the
/// surface-local pixel space the coordinate normalizer expects.
///
/// Returns `None` for events not represented by the input subsystem
/// (keyboard, IME, wheel, resize and so on).
pub fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            // winit 0.30: ModifiersChanged carries a wrapper with `.state()`.
            let ms: ModifiersState = m.state();
            Some(InputEvent::ModifiersChanged(map_modifiers(ms)))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            let button = map_mouse_button(*button);

            // winit 0.30 does not expose a cursor query; use the tracked
            // pointer position and modifier state.
            let modifiers = state.modifiers;
            let (x, y) = state.pointer_pos.unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: st,
                x,
                y,
                modifiers,
            }))
        }

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::DeviceId;

    #[test]
    fn cursor_moved_converts_physical_to_logical() {
        let state = InputState::default();
        let ev = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(700.0, 350.0),
        };

        let out = translate_window_event(2.0, &state, &ev);
        assert_eq!(
            out,
            Some(InputEvent::PointerMoved(PointerMoveEvent { x: 350.0, y: 175.0 }))
        );
    }

    #[test]
    fn mouse_input_uses_tracked_pointer_position() {
        let mut state = InputState::default();
        state.pointer_pos = Some((120.0, 40.0));

        let ev = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };

        let out = translate_window_event(1.0, &state, &ev);
        assert_eq!(
            out,
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 120.0,
                y: 40.0,
                modifiers: Modifiers::default(),
            }))
        );
    }

    #[test]
    fn cursor_left_and_focus_translate() {
        let state = InputState::default();
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::CursorLeft {
                device_id: DeviceId::dummy(),
            }),
            Some(InputEvent::PointerLeft)
        );
        assert_eq!(
            translate_window_event(1.0, &state, &WindowEvent::Focused(true)),
            Some(InputEvent::Focused(true))
        );
    }

    #[test]
    fn unrelated_events_are_skipped() {
        let state = InputState::default();
        let ev = WindowEvent::Resized(winit::dpi::PhysicalSize::new(800, 600));
        assert_eq!(translate_window_event(1.0, &state, &ev), None);
    }
}

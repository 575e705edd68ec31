//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Host code is responsible for translating platform events into
//! `InputEvent`s (see [`platform::winit`] for the provided translation).

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

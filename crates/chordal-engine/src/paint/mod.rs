//! Paint model shared between the capture session and host renderers.
//!
//! Scope:
//! - color representation (straight-alpha linear RGBA)
//! - the fixed palette the capture tool draws with
//!
//! Geometry types remain in `coords`.

mod color;
mod palette;

pub use color::Color;
pub use palette::Palette;

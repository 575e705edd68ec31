//! Coordinate types shared across the capture core and scene stream.
//!
//! Canonical space:
//! - Normalized device coordinates, both axes spanning [-1, 1]
//! - Origin at the surface center
//! - +X right, +Y up
//!
//! Raw pointer input arrives in surface-local pixels (top-left origin,
//! +Y down) and is converted through [`SurfaceSize::to_ndc`] before it
//! reaches any committed state.

mod surface;
mod vec2;

pub use surface::SurfaceSize;
pub use vec2::Vec2;

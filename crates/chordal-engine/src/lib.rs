//! Chordal engine crate.
//!
//! This crate owns the shape-capture core used by host applications:
//! pointer input, the circle-then-segment capture state machine, the
//! segment/circle intersection solver, and the renderer-agnostic scene
//! stream a host renderer consumes.

pub mod capture;
pub mod coords;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod scene;
pub mod tess;

pub mod logging;
pub mod paint;

//! Interactive shape capture.
//!
//! Responsibilities:
//! - the circle-then-segment capture state machine ([`CaptureSession`])
//! - driving the state machine from platform-agnostic input ([`CaptureDriver`])
//! - reproducible pointer scripts for replay and testing ([`ReplayScript`])
//!
//! A session accepts exactly one circle followed by one segment, computes
//! their intersections on the final commit, and then ignores further input.

mod driver;
mod script;
mod session;

pub use driver::CaptureDriver;
pub use script::{ReplayScript, ScriptError, ScriptEvent};
pub use session::{CaptureCommit, CapturePhase, CaptureSession};

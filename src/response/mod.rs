//! Response capture
//!
//! Turns raw pointer clicks on a rendered rating scale into a validated
//! ordinal score. One [`ResponseSession`] exists per presented question; it
//! moves from awaiting a first selection, through any number of corrections,
//! to a terminal submitted state, and emits the render instructions needed to
//! keep the button visuals in sync along the way.

pub mod session;

pub use session::{RenderInstruction, ResponseSession, SessionState};

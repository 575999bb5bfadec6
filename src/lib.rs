//! # Stimulus Rater
//!
//! An engine for speed-perception rating experiments: a stimulus approaches the
//! viewer at a controlled apparent speed, and the participant rates that speed
//! on an N-point ordinal scale by clicking rating buttons and a submit control.
//!
//! ## Overview
//!
//! The crate provides the two tightly coupled kernels such an experiment needs:
//!
//! - A deterministic-with-jitter trajectory generator that turns an abstract
//!   speed parameter into a believable approach-and-veer motion path, one pose
//!   per animation tick.
//! - A response-capture state machine that turns raw pointer clicks on a
//!   rendered rating scale into a validated ordinal score, with correction
//!   before commit.
//!
//! A presenter (render/input loop) drives both: it steps the trajectory on an
//! animation timer, renders each pose, then presents the scale and feeds
//! pointer presses to a [`ResponseSession`] until the participant submits.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use stimulus_rater::motion::{MotionParams, TrajectoryState, UniformJitter};
//! use stimulus_rater::scale::ScaleLayout;
//! use stimulus_rater::response::ResponseSession;
//!
//! // Animate a stimulus approaching at speed 40
//! let params = MotionParams::new(40, -75, (0, 400));
//! let mut jitter = UniformJitter::seeded(7);
//! let mut state = TrajectoryState::new(&params);
//! while state.position().1 >= -350 {
//!     let (next, pose) = state.step(&params, &mut jitter);
//!     // ... render pose ...
//!     state = next;
//! }
//!
//! // Capture the rating
//! let legends: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
//! let layout = Arc::new(ScaleLayout::build(
//!     7,
//!     legends,
//!     vec!["How fast did the object move?".into()],
//!     800,
//! ).expect("valid scale"));
//! let mut session = ResponseSession::new(layout);
//! session.handle_click((100, -50)); // button 5
//! session.handle_click((225, -130)); // submit
//! assert_eq!(session.score(), Some(5));
//! ```
//!
//! ## Architecture
//!
//! - [`motion`]: per-tick trajectory generation with injectable jitter
//! - [`scale`]: rating-scale geometry and hit testing
//! - [`response`]: click-driven response capture state machine
//! - [`trial`]: trial records, speed schedules, and the session result log
//! - [`app`]: CLI and configuration management

pub mod app;
pub mod motion;
pub mod response;
pub mod scale;
pub mod trial;

// Re-export commonly used types
pub use motion::{MotionParams, Pose, TrajectoryState, UniformJitter};
pub use response::{RenderInstruction, ResponseSession, SessionState};
pub use scale::ScaleLayout;
pub use trial::{SessionLog, TrialRecord};

/// Result type alias for the stimulus rater
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the stimulus rater
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scale point counts must be odd so a neutral midpoint exists.
    #[error("invalid scale size: {0} (must be odd and >= 3)")]
    InvalidScaleSize(usize),

    /// One legend is required per scale point.
    #[error("legend count mismatch: expected {expected}, got {got}")]
    LegendCountMismatch { expected: usize, got: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

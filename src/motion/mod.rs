//! Trajectory generation
//!
//! Produces the approach-and-veer motion path of a stimulus, one pose per
//! animation tick. The path has two phases: a straight descent with small
//! horizontal jitter, then a locked diagonal whose steepness scales with the
//! nominal speed. The diagonal and rotation magnitudes are the analog cue that
//! makes higher speed values visually distinguishable.

pub mod jitter;
pub mod trajectory;

pub use jitter::{JitterSource, ScriptedJitter, UniformJitter};
pub use trajectory::{Approach, MotionParams, Phase, Pose, Side, TrajectoryState};

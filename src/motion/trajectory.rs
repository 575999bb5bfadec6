//! Per-tick trajectory stepping
//!
//! A trajectory descends from the start position at a fixed vertical speed.
//! While descending it jitters horizontally; the first tick its y coordinate
//! drops below the crossover it locks a side (from the sign of the jittered x)
//! and veers into a constant diagonal whose slope and rotation grow with the
//! nominal speed. There is no terminal state: stepping is a total per-tick
//! transform, and the caller decides when the run is over (typically when the
//! pose passes a stop threshold symmetric to the start).

use super::jitter::{JitterSource, JITTER_STEP};
use serde::{Deserialize, Serialize};

/// Position and rotation of the stimulus at one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    /// Rotation to apply to the rendered stimulus, in degrees
    pub rotation_deg: i32,
}

/// Constant configuration for one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionParams {
    /// Vertical advance per tick, in pixels. Expected to be a positive
    /// multiple of 5; other values degrade via integer truncation in the
    /// diagonal-phase math rather than erroring.
    pub speed_px_per_tick: i32,
    /// The y coordinate below which the trajectory locks a side and veers
    pub crossover_y: i32,
    /// Start position of the stimulus
    pub start: (i32, i32),
}

impl MotionParams {
    /// Create motion parameters for one run
    pub fn new(speed_px_per_tick: i32, crossover_y: i32, start: (i32, i32)) -> Self {
        Self {
            speed_px_per_tick,
            crossover_y,
            start,
        }
    }

    /// Diagonal x advance per tick once a side is locked (unsigned)
    pub fn diagonal_step(&self) -> i32 {
        JITTER_STEP * (self.speed_px_per_tick / JITTER_STEP)
    }

    /// Rotation magnitude in the diverging phase (unsigned)
    pub fn diverging_rotation(&self) -> i32 {
        7 + self.speed_px_per_tick / JITTER_STEP
    }
}

/// Side of the screen a diverging trajectory is locked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal movement for this side: Left = -1, Right = +1
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Phase of a trajectory
///
/// The side is carried inside `Diverging` so it is locked exactly once, at the
/// phase transition, and cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Straight descent with per-tick horizontal jitter
    Descending,
    /// Locked diagonal toward one side of the screen
    Diverging(Side),
}

/// Trajectory state threaded through successive `step` calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryState {
    position: (i32, i32),
    phase: Phase,
}

impl TrajectoryState {
    /// Initial state for a run: at the start position, descending
    pub fn new(params: &MotionParams) -> Self {
        Self {
            position: params.start,
            phase: Phase::Descending,
        }
    }

    /// Current position
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The locked side, if the trajectory has diverged
    pub fn locked_side(&self) -> Option<Side> {
        match self.phase {
            Phase::Descending => None,
            Phase::Diverging(side) => Some(side),
        }
    }

    /// Advance one tick, returning the updated state and the emitted pose
    ///
    /// While descending, the pose moves by one jitter draw and tilts by the
    /// same amount; the tick whose vertical advance first drops below the
    /// crossover still emits that jitter pose, and the returned state is
    /// diverging with the side locked from the sign of the jittered x. Once
    /// diverging, every tick moves by a constant signed diagonal step.
    pub fn step(self, params: &MotionParams, jitter: &mut dyn JitterSource) -> (Self, Pose) {
        let (x, y) = self.position;
        let new_y = y - params.speed_px_per_tick;

        let (new_x, rotation_deg, phase) = match self.phase {
            Phase::Descending => {
                let j = jitter.next_jitter();
                let new_x = x + j;
                let phase = if new_y < params.crossover_y {
                    let side = if new_x >= 0 { Side::Right } else { Side::Left };
                    Phase::Diverging(side)
                } else {
                    Phase::Descending
                };
                (new_x, j, phase)
            }
            Phase::Diverging(side) => {
                let new_x = x + side.sign() * params.diagonal_step();
                (new_x, side.sign() * params.diverging_rotation(), self.phase)
            }
        };

        let state = Self {
            position: (new_x, new_y),
            phase,
        };
        let pose = Pose {
            x: new_x,
            y: new_y,
            rotation_deg,
        };
        (state, pose)
    }
}

/// Iterator driving a trajectory until its pose drops below a stop threshold
///
/// The headless analogue of an animation loop: yields one pose per tick while
/// `pose.y >= stop_y`, then ends. The generator itself never terminates; the
/// threshold is this iterator's concern.
pub struct Approach<'a, J: JitterSource> {
    params: MotionParams,
    state: TrajectoryState,
    jitter: &'a mut J,
    stop_y: i32,
    done: bool,
}

impl<'a, J: JitterSource> Approach<'a, J> {
    /// Start an approach run from the configured start position
    pub fn new(params: MotionParams, jitter: &'a mut J, stop_y: i32) -> Self {
        Self {
            state: TrajectoryState::new(&params),
            params,
            jitter,
            stop_y,
            done: false,
        }
    }

    /// State after the most recently yielded tick
    pub fn state(&self) -> &TrajectoryState {
        &self.state
    }
}

impl<J: JitterSource> Iterator for Approach<'_, J> {
    type Item = Pose;

    fn next(&mut self) -> Option<Pose> {
        if self.done {
            return None;
        }
        let (state, pose) = self.state.step(&self.params, self.jitter);
        self.state = state;
        if pose.y < self.stop_y {
            self.done = true;
            return None;
        }
        Some(pose)
    }
}

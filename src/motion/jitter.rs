//! Jitter sources for the descending phase
//!
//! The descending phase of a trajectory perturbs the stimulus horizontally by
//! one draw per tick from {-5, 0, +5}. Randomness is kept behind this trait so
//! the generator itself stays deterministic and testable given a fixed seed or
//! a scripted sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Horizontal jitter step size in pixels
pub const JITTER_STEP: i32 = 5;

/// Source of per-tick horizontal jitter
pub trait JitterSource {
    /// Draw the next jitter value, one of -5, 0, or +5 pixels.
    fn next_jitter(&mut self) -> i32;
}

/// Uniform jitter over {-5, 0, +5} backed by an RNG
#[derive(Debug)]
pub struct UniformJitter<R: Rng = SmallRng> {
    rng: R,
}

impl UniformJitter<SmallRng> {
    /// Create a jitter source seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a reproducible jitter source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> UniformJitter<R> {
    /// Wrap an existing RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn next_jitter(&mut self) -> i32 {
        self.rng.gen_range(-1..=1) * JITTER_STEP
    }
}

/// Replays a fixed jitter sequence, then holds at zero
///
/// Intended for tests that need an exact, hand-written descent path.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJitter {
    values: VecDeque<i32>,
}

impl ScriptedJitter {
    /// Create a scripted source from a sequence of jitter values
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// A source that always draws zero (perfectly straight descent)
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of scripted draws remaining
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl JitterSource for ScriptedJitter {
    fn next_jitter(&mut self) -> i32 {
        self.values.pop_front().unwrap_or(0)
    }
}

//! Trial bookkeeping
//!
//! Data recorded across an experiment run: one [`TrialRecord`] per completed
//! rating trial, speed schedules for the rating and training blocks, and the
//! on-disk [`SessionLog`] that collects everything a run produced.

pub mod record;
pub mod schedule;

pub use record::{LogMetadata, SessionLog, TrialRecord, CURRENT_FORMAT_VERSION};
pub use schedule::{nominal, rating_schedule, training_schedule, RATING_SPEEDS, TRAINING_SPEEDS};

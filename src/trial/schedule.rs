//! Speed schedules
//!
//! The experiment draws speeds from a fixed discrete set: every multiple of
//! 10 from 10 to 70 for rating trials, and only the two extremes for the
//! training block so the participant anchors the ends of the scale.

use rand::seq::SliceRandom;
use rand::Rng;

/// Speeds presented during rating trials, in pixels per tick
pub const RATING_SPEEDS: [i32; 7] = [10, 20, 30, 40, 50, 60, 70];

/// Speeds presented during training: the slowest and fastest only
pub const TRAINING_SPEEDS: [i32; 2] = [10, 70];

/// Nominal rating unit for a speed (10 px/tick per unit)
pub fn nominal(speed_px_per_tick: i32) -> i32 {
    speed_px_per_tick / 10
}

/// Build a shuffled rating schedule
///
/// Each rating speed appears `repeats` times, then the whole sequence is
/// shuffled so the participant cannot anticipate the next speed.
pub fn rating_schedule<R: Rng>(repeats: usize, rng: &mut R) -> Vec<i32> {
    let mut speeds: Vec<i32> = RATING_SPEEDS
        .iter()
        .copied()
        .flat_map(|s| std::iter::repeat(s).take(repeats))
        .collect();
    speeds.shuffle(rng);
    speeds
}

/// Build the training schedule: `passes` passes over the extreme speeds,
/// in fixed slow-then-fast order
pub fn training_schedule(passes: usize) -> Vec<i32> {
    TRAINING_SPEEDS
        .iter()
        .copied()
        .cycle()
        .take(passes * TRAINING_SPEEDS.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_nominal_maps_speed_to_rating_units() {
        assert_eq!(nominal(10), 1);
        assert_eq!(nominal(40), 4);
        assert_eq!(nominal(70), 7);
    }

    #[test]
    fn test_rating_schedule_has_each_speed_repeated() {
        let mut rng = SmallRng::seed_from_u64(1);
        let schedule = rating_schedule(2, &mut rng);
        assert_eq!(schedule.len(), 14);
        for speed in RATING_SPEEDS {
            assert_eq!(
                schedule.iter().filter(|&&s| s == speed).count(),
                2,
                "speed {} not repeated twice",
                speed
            );
        }
    }

    #[test]
    fn test_rating_schedule_is_seeded_deterministic() {
        let mut a = SmallRng::seed_from_u64(5);
        let mut b = SmallRng::seed_from_u64(5);
        assert_eq!(rating_schedule(2, &mut a), rating_schedule(2, &mut b));
    }

    #[test]
    fn test_rating_schedule_zero_repeats_is_empty() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(rating_schedule(0, &mut rng).is_empty());
    }

    #[test]
    fn test_training_schedule_alternates_extremes() {
        assert_eq!(training_schedule(2), vec![10, 70, 10, 70]);
        assert_eq!(training_schedule(1), vec![10, 70]);
        assert!(training_schedule(0).is_empty());
    }
}

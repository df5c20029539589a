//! Difficulty curve
//!
//! Maps cumulative score to the global obstacle speed multiplier and the
//! spawn interval. Pure; recomputed at the start of every step.

use crate::consts::*;

/// Difficulty parameters for a given score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Multiplier applied to every obstacle's fall speed, in [1.0, MAX_SPEED_SCALE]
    pub speed_scale: f32,
    /// Seconds between spawns, in [MIN_SPAWN_INTERVAL, BASE_SPAWN_INTERVAL]
    pub spawn_interval: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        difficulty_from_score(0)
    }
}

/// Compute difficulty from score
///
/// - `speed_scale = 1 + min(2.2, score / 30) * 0.55`
/// - `spawn_interval = max(0.33, 0.95 - score * 0.01)`
pub fn difficulty_from_score(score: u64) -> Difficulty {
    let score = score as f32;
    let speed_scale = 1.0 + SPEED_RAMP_CAP.min(score / SPEED_RAMP_SCORE) * SPEED_RAMP_GAIN;
    let spawn_interval = MIN_SPAWN_INTERVAL.max(BASE_SPAWN_INTERVAL - score * SPAWN_INTERVAL_STEP);
    Difficulty {
        speed_scale,
        spawn_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_zero() {
        let d = difficulty_from_score(0);
        assert_eq!(d.speed_scale, 1.0);
        assert_eq!(d.spawn_interval, BASE_SPAWN_INTERVAL);
    }

    #[test]
    fn test_mid_curve() {
        let d = difficulty_from_score(30);
        assert!((d.speed_scale - 1.55).abs() < 1e-5);
        assert!((d.spawn_interval - 0.65).abs() < 1e-5);
    }

    #[test]
    fn test_saturation() {
        // Spawn interval bottoms out just past score 62, speed just past 66
        let d = difficulty_from_score(63);
        assert_eq!(d.spawn_interval, MIN_SPAWN_INTERVAL);
        assert!(d.speed_scale < MAX_SPEED_SCALE);

        let d = difficulty_from_score(67);
        assert_eq!(d.speed_scale, MAX_SPEED_SCALE);

        let d = difficulty_from_score(1_000_000);
        assert_eq!(d.speed_scale, MAX_SPEED_SCALE);
        assert_eq!(d.spawn_interval, MIN_SPAWN_INTERVAL);
        assert!((MAX_SPEED_SCALE - 2.21).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn difficulty_is_bounded(score in 0u64..100_000) {
            let d = difficulty_from_score(score);
            prop_assert!(d.speed_scale >= 1.0);
            prop_assert!(d.speed_scale <= MAX_SPEED_SCALE);
            prop_assert!(d.spawn_interval >= MIN_SPAWN_INTERVAL);
            prop_assert!(d.spawn_interval <= BASE_SPAWN_INTERVAL);
        }

        #[test]
        fn difficulty_is_monotonic(score in 0u64..100_000, bump in 1u64..500) {
            let lo = difficulty_from_score(score);
            let hi = difficulty_from_score(score + bump);
            prop_assert!(hi.speed_scale >= lo.speed_scale);
            prop_assert!(hi.spawn_interval <= lo.spawn_interval);
        }
    }
}

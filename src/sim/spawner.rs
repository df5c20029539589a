//! Obstacle spawning
//!
//! Obstacles are rolled from a caller-supplied RNG so spawn sequences are
//! reproducible from a seed. Each roll draws four uniform samples in order:
//! width, height, x, fall speed.

use rand::Rng;

use super::rect::Rect;
use super::state::{GameEvent, GameState, Obstacle, Viewport};
use crate::consts::*;

/// Roll a new obstacle just above the viewport
pub fn roll_obstacle<R: Rng + ?Sized>(viewport: &Viewport, id: u32, rng: &mut R) -> Obstacle {
    let w = OBSTACLE_MIN_WIDTH + rng.random::<f32>() * (OBSTACLE_MAX_WIDTH - OBSTACLE_MIN_WIDTH);
    let h = OBSTACLE_MIN_HEIGHT + rng.random::<f32>() * (OBSTACLE_MAX_HEIGHT - OBSTACLE_MIN_HEIGHT);
    let x = SPAWN_MARGIN + rng.random::<f32>() * (viewport.width - SPAWN_MARGIN * 2.0 - w);
    let y = -h - SPAWN_HEADROOM;
    let speed = OBSTACLE_BASE_SPEED + rng.random::<f32>() * OBSTACLE_SPEED_SPREAD;

    Obstacle {
        id,
        rect: Rect::new(x, y, w, h),
        speed,
    }
}

/// Roll an obstacle and append it to the state; returns its id
///
/// Resetting the spawn timer is the caller's job.
pub fn spawn_obstacle<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> u32 {
    let id = state.next_entity_id();
    let obstacle = roll_obstacle(&state.viewport, id, rng);
    log::trace!(
        "Spawned obstacle {} at x={:.1} ({:.1}x{:.1}, speed {:.1})",
        id,
        obstacle.rect.x(),
        obstacle.rect.w(),
        obstacle.rect.h(),
        obstacle.speed
    );
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned { id });
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Yields 0.0 for every f32 sample
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let viewport = Viewport::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for id in 0..2000 {
            let o = roll_obstacle(&viewport, id, &mut rng);
            assert!(o.rect.w() >= OBSTACLE_MIN_WIDTH && o.rect.w() <= OBSTACLE_MAX_WIDTH);
            assert!(o.rect.h() >= OBSTACLE_MIN_HEIGHT && o.rect.h() <= OBSTACLE_MAX_HEIGHT);
            assert!(o.rect.x() >= SPAWN_MARGIN);
            assert!(o.rect.right() <= viewport.width - SPAWN_MARGIN + 1e-3);
            assert!(o.speed >= OBSTACLE_BASE_SPEED);
            assert!(o.speed < OBSTACLE_BASE_SPEED + OBSTACLE_SPEED_SPREAD);
            // Fully above the viewport
            assert!(o.rect.bottom() < 0.0);
            assert!((o.rect.y() - (-o.rect.h() - SPAWN_HEADROOM)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_samples_give_minimums() {
        let mut rng = ZeroRng;
        let o = roll_obstacle(&Viewport::default(), 1, &mut rng);
        assert_eq!(o.rect, Rect::new(SPAWN_MARGIN, -OBSTACLE_MIN_HEIGHT - 10.0, 26.0, 32.0));
        assert_eq!(o.speed, OBSTACLE_BASE_SPEED);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let viewport = Viewport::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for id in 0..50 {
            assert_eq!(
                roll_obstacle(&viewport, id, &mut a),
                roll_obstacle(&viewport, id, &mut b)
            );
        }
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut state = GameState::new(Viewport::default());
        let mut rng = Pcg32::seed_from_u64(3);

        let first = spawn_obstacle(&mut state, &mut rng);
        let second = spawn_obstacle(&mut state, &mut rng);

        assert!(second > first);
        let ids: Vec<u32> = state.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ObstacleSpawned { id: first },
                GameEvent::ObstacleSpawned { id: second }
            ]
        );
    }
}

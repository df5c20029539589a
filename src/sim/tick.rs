//! Simulation step
//!
//! Advances the game state by one variable-length frame. The step order is:
//! difficulty, player movement, spawn timer, obstacle fall / clear / collision.

use rand::Rng;

use super::autopilot;
use super::collision::player_hit;
use super::difficulty::difficulty_from_score;
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GameState, InputState};

/// Input for a single step
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held direction flags
    pub held: InputState,
    /// Demo mode - steering comes from the autopilot instead of `held`
    pub autopilot: bool,
}

impl TickInput {
    pub const fn held(left: bool, right: bool) -> Self {
        Self {
            held: InputState::new(left, right),
            autopilot: false,
        }
    }
}

/// Advance the game state by `dt` seconds
///
/// Does nothing unless the run is active. At most one obstacle spawns per
/// step no matter how large `dt` is. A collision ends the run immediately and
/// skips the remaining obstacles.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, dt: f32, rng: &mut R) {
    if !state.is_running() {
        return;
    }

    let difficulty = difficulty_from_score(state.score);
    state.speed_scale = difficulty.speed_scale;
    state.spawn_interval = difficulty.spawn_interval;

    let held = if input.autopilot {
        autopilot::steer(state)
    } else {
        input.held
    };
    let viewport = state.viewport;
    state.player.steer(held.direction(), dt, &viewport);

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        spawn_obstacle(state, rng);
    }

    let speed_scale = state.speed_scale;
    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        obstacle.fall(speed_scale, dt);

        if obstacle.is_cleared(&viewport) {
            let cleared = state.obstacles.remove(i);
            state.score += 1;
            state.events.push(GameEvent::ObstacleCleared {
                id: cleared.id,
                score: state.score,
            });
            log::debug!("Obstacle {} cleared, score {}", cleared.id, state.score);
            continue;
        }

        if player_hit(&state.player, &state.obstacles[i]) {
            state.game_over();
            return;
        }

        i += 1;
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform and
//! rendering dependencies:
//! - Time only enters through the `dt` passed to `tick`
//! - Randomness only enters through the RNG passed to `tick`
//! - Obstacles are iterated in spawn order

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{player_hit, rects_intersect};
pub use difficulty::{Difficulty, difficulty_from_score};
pub use rect::Rect;
pub use spawner::{roll_obstacle, spawn_obstacle};
pub use state::{
    FrameSnapshot, GameEvent, GamePhase, GameState, InputState, Obstacle, Player, Viewport,
};
pub use tick::{TickInput, tick};

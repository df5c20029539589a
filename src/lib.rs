//! Lane Dodge - a single-lane obstacle dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty, spawning, movement, collisions)
//! - `driver`: Loop driver turning display timestamps into simulation steps
//! - `platform`: Frame clock and input edge mapping
//! - `renderer`: Draw primitives, scene composition and the WebGPU pipeline
//! - `settings`: Startup configuration

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{LoopDriver, RunCommand, RunSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default viewport size in pixels
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 420.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    /// Largest delta time a single frame may contribute (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Horizontal inset the player is clamped to on both sides
    pub const LANE_MARGIN: f32 = 12.0;

    /// Player vehicle defaults
    pub const PLAYER_WIDTH: f32 = 46.0;
    pub const PLAYER_HEIGHT: f32 = 86.0;
    /// Horizontal speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 360.0;
    /// Gap between the player's bottom edge and the viewport bottom
    pub const PLAYER_BOTTOM_GAP: f32 = 24.0;

    /// Obstacle spawn ranges
    pub const SPAWN_MARGIN: f32 = 16.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 26.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 70.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 32.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 90.0;
    /// Extra distance above the viewport a new obstacle starts at
    pub const SPAWN_HEADROOM: f32 = 10.0;
    /// Fall speed is drawn from [BASE, BASE + SPREAD) pixels/s
    pub const OBSTACLE_BASE_SPEED: f32 = 220.0;
    pub const OBSTACLE_SPEED_SPREAD: f32 = 120.0;
    /// Obstacles whose top edge passes `height + DESPAWN_MARGIN` are cleared
    pub const DESPAWN_MARGIN: f32 = 20.0;

    /// Difficulty curve
    pub const BASE_SPAWN_INTERVAL: f32 = 0.95;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.33;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.01;
    pub const SPEED_RAMP_SCORE: f32 = 30.0;
    pub const SPEED_RAMP_CAP: f32 = 2.2;
    pub const SPEED_RAMP_GAIN: f32 = 0.55;
    /// Speed scale reached once the ramp saturates (~2.21)
    pub const MAX_SPEED_SCALE: f32 = 1.0 + SPEED_RAMP_CAP * SPEED_RAMP_GAIN;

    /// Narrowest viewport where both the player and spawn ranges are non-empty
    pub const MIN_VIEWPORT_WIDTH: f32 = 2.0 * SPAWN_MARGIN + OBSTACLE_MAX_WIDTH;
    /// Shortest viewport that still fits the player above its bottom gap
    pub const MIN_VIEWPORT_HEIGHT: f32 = PLAYER_BOTTOM_GAP + PLAYER_HEIGHT;
}

/// Clamp `v` into `[lo, hi]` as `max(lo, min(hi, v))`
///
/// Unlike `f32::clamp` this never panics when `lo > hi`; `lo` wins.
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
        // Inverted range resolves to the lower bound
        assert_eq!(clamp(5.0, 8.0, 2.0), 8.0);
    }

    #[test]
    fn test_viewport_minimums() {
        assert_eq!(consts::MIN_VIEWPORT_WIDTH, 102.0);
        assert_eq!(consts::MIN_VIEWPORT_HEIGHT, 110.0);
    }
}

//! Game state and core simulation types
//!
//! `GameState` is owned by the loop driver and mutated only by the
//! simulation step and the run commands (`start`, `restart`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, difficulty_from_score};
use super::rect::Rect;
use crate::clamp;
use crate::consts::*;

/// Fixed viewport dimensions (pixels), supplied at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Full viewport as a rect at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// y past which an obstacle's top edge counts as cleared
    #[inline]
    pub fn despawn_line(&self) -> f32 {
        self.height + DESPAWN_MARGIN
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for the first start command
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on collision; waits for restart
    GameOver,
}

/// Held direction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Horizontal direction in {-1, 0, 1}; both held cancel out
    #[inline]
    pub fn direction(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; `y` never changes after construction
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
}

impl Player {
    /// Player centred horizontally, resting `PLAYER_BOTTOM_GAP` above the bottom
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width / 2.0 - PLAYER_WIDTH / 2.0,
                viewport.height - PLAYER_BOTTOM_GAP - PLAYER_HEIGHT,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Leftmost allowed x
    #[inline]
    pub fn min_x(&self) -> f32 {
        LANE_MARGIN
    }

    /// Rightmost allowed x
    #[inline]
    pub fn max_x(&self, viewport: &Viewport) -> f32 {
        viewport.width - LANE_MARGIN - self.size.x
    }

    /// Move horizontally by `dir * speed * dt`, then clamp into the lane
    pub fn steer(&mut self, dir: f32, dt: f32, viewport: &Viewport) {
        self.pos.x += dir * self.speed * dt;
        self.pos.x = clamp(self.pos.x, self.min_x(), self.max_x(viewport));
    }

    pub fn recenter(&mut self, viewport: &Viewport) {
        self.pos.x = viewport.width / 2.0 - self.size.x / 2.0;
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    /// Base fall speed (pixels/s), fixed at spawn; scaled by `speed_scale` when applied
    pub speed: f32,
}

impl Obstacle {
    /// Advance downward by `speed * speed_scale * dt`
    #[inline]
    pub fn fall(&mut self, speed_scale: f32, dt: f32) {
        self.rect.pos.y += self.speed * speed_scale * dt;
    }

    /// True once the top edge has passed the viewport's despawn line
    #[inline]
    pub fn is_cleared(&self, viewport: &Viewport) -> bool {
        self.rect.y() > viewport.despawn_line()
    }
}

/// Events produced during a step, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { id: u32 },
    /// Obstacle fell off the bottom; `score` is the new total
    ObstacleCleared { id: u32, score: u64 },
    /// Terminal transition for the run; emitted once per run
    GameOver { score: u64 },
}

/// Read-only view of the state for rendering and HUD updates
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u64,
    pub speed_scale: f32,
    pub player: Rect,
    pub obstacles: Vec<Rect>,
}

impl FrameSnapshot {
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Obstacles survived this run
    pub score: u64,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    pub speed_scale: f32,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game state for the given viewport
    pub fn new(viewport: Viewport) -> Self {
        let Difficulty {
            speed_scale,
            spawn_interval,
        } = Difficulty::default();

        Self {
            viewport,
            phase: GamePhase::Idle,
            score: 0,
            spawn_timer: 0.0,
            spawn_interval,
            speed_scale,
            obstacles: Vec::new(),
            player: Player::new(&viewport),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Full reset into a fresh run: player recentred, difficulty back to score 0
    pub fn start(&mut self) {
        self.restart();
        self.player.recenter(&self.viewport);
        log::info!("Run started");
    }

    /// Reset score, obstacles and spawn timer and resume running
    ///
    /// The player keeps its horizontal position.
    pub fn restart(&mut self) {
        let difficulty = difficulty_from_score(0);
        self.phase = GamePhase::Running;
        self.score = 0;
        self.spawn_timer = 0.0;
        self.spawn_interval = difficulty.spawn_interval;
        self.speed_scale = difficulty.speed_scale;
        self.obstacles.clear();
        log::debug!("Run state reset");
    }

    /// Enter the terminal phase for this run
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over with score {}", self.score);
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            viewport: self.viewport,
            phase: self.phase,
            score: self.score,
            speed_scale: self.speed_scale,
            player: self.player.rect(),
            obstacles: self.obstacles.iter().map(|o| o.rect).collect(),
        }
    }
}

//! Loop driver
//!
//! Owns the game state, the seeded RNG, the frame clock and the held input.
//! Each display refresh calls [`LoopDriver::frame`] with its timestamp; run
//! commands issued between frames are applied at the start of the next one.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{FrameClock, FrameSource};
use crate::renderer::{Painter, draw_frame};
use crate::settings::Settings;
use crate::sim::{
    FrameSnapshot, GameEvent, GamePhase, GameState, InputState, TickInput, Viewport, tick,
};

/// A start or restart request waiting for the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCommand {
    /// Full reset, player recentred
    Start,
    /// Reset score, obstacles and spawn timer, player stays put
    Restart,
}

/// Outcome of [`LoopDriver::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: u64,
    pub phase: GamePhase,
}

pub struct LoopDriver {
    state: GameState,
    rng: Pcg32,
    clock: FrameClock,
    input: TickInput,
    pending: Option<RunCommand>,
}

impl LoopDriver {
    /// Idle driver for a fixed viewport
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        log::debug!("Loop driver created with seed {}", seed);
        Self {
            state: GameState::new(viewport),
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(),
            input: TickInput::default(),
            pending: None,
        }
    }

    /// Driver configured from settings; `fallback_seed` is used when none is set
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Self {
        let mut driver = Self::new(settings.viewport, settings.seed_or(fallback_seed));
        driver.set_autopilot(settings.autopilot);
        driver
    }

    /// Replace the held direction flags
    pub fn set_direction(&mut self, left: bool, right: bool) {
        self.input.held = InputState::new(left, right);
    }

    pub fn held(&self) -> InputState {
        self.input.held
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Ask for a fresh run; ignored unless idle
    pub fn request_start(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.pending = Some(RunCommand::Start);
        }
    }

    /// Ask for another run; ignored while running
    ///
    /// From idle this is the same as a start.
    pub fn request_restart(&mut self) {
        self.pending = match self.state.phase {
            GamePhase::Idle => Some(RunCommand::Start),
            GamePhase::GameOver => Some(RunCommand::Restart),
            GamePhase::Running => self.pending,
        };
    }

    pub fn pending(&self) -> Option<RunCommand> {
        self.pending
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tools and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot()
    }

    /// Apply any pending command, then step the simulation to `ts`
    ///
    /// Returns the events produced during this frame.
    pub fn advance(&mut self, ts: f64) -> Vec<GameEvent> {
        if let Some(command) = self.pending.take() {
            match command {
                RunCommand::Start => self.state.start(),
                RunCommand::Restart => {
                    self.state.restart();
                    log::info!("Run restarted");
                }
            }
            self.clock.reset();
        }

        let dt = self.clock.advance(ts);
        if self.state.is_running() {
            tick(&mut self.state, &self.input, dt, &mut self.rng);
        }

        self.state.drain_events()
    }

    /// One display refresh: advance, then draw the resulting state
    pub fn frame<P: Painter + ?Sized>(&mut self, ts: f64, painter: &mut P) -> Vec<GameEvent> {
        let events = self.advance(ts);
        draw_frame(painter, &self.state.snapshot());
        events
    }

    /// Drive frames from `source` until it runs dry or the run stops
    pub fn run<S, P>(&mut self, source: &mut S, painter: &mut P) -> RunSummary
    where
        S: FrameSource + ?Sized,
        P: Painter + ?Sized,
    {
        let mut frames = 0;
        while let Some(ts) = source.next_frame() {
            self.frame(ts, painter);
            frames += 1;
            if !self.state.is_running() && self.pending.is_none() {
                break;
            }
        }

        RunSummary {
            frames,
            score: self.state.score,
            phase: self.state.phase,
        }
    }
}

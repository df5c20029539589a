//! Frame clock
//!
//! Turns a monotonic millisecond timestamp stream (one per display refresh)
//! into bounded per-frame delta times. Dropped time past the clamp is not
//! caught up: a slow display slows the game down instead of skipping frames.

use crate::consts::MAX_FRAME_DT;

/// A source of display refresh timestamps (milliseconds, monotonic)
pub trait FrameSource {
    /// Next frame timestamp, or `None` when the source is exhausted
    fn next_frame(&mut self) -> Option<f64>;
}

/// Derives clamped delta times from successive timestamps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ts: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the baseline; the next frame contributes `dt = 0`
    pub fn reset(&mut self) {
        self.last_ts = None;
    }

    /// Seconds elapsed since the previous timestamp, capped at `MAX_FRAME_DT`
    pub fn advance(&mut self, ts: f64) -> f32 {
        let last = self.last_ts.unwrap_or(ts);
        self.last_ts = Some(ts);
        (((ts - last) / 1000.0) as f32).min(MAX_FRAME_DT)
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ts
    }
}

/// Synthetic frames at a fixed cadence, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedCadence {
    next_ts: f64,
    interval_ms: f64,
    remaining: Option<u64>,
}

impl FixedCadence {
    /// `hz` frames per second starting at `start_ms`, without end
    pub fn new(hz: f64, start_ms: f64) -> Self {
        Self {
            next_ts: start_ms,
            interval_ms: 1000.0 / hz,
            remaining: None,
        }
    }

    /// Stop after `frames` timestamps
    pub fn take(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameSource for FixedCadence {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let ts = self.next_ts;
        self.next_ts += self.interval_ms;
        Some(ts)
    }
}

/// Replays a fixed list of timestamps
impl FrameSource for std::vec::IntoIter<f64> {
    fn next_frame(&mut self) -> Option<f64> {
        self.next()
    }
}

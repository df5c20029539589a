//! Input edge mapping
//!
//! Browser events arrive as discrete edges (key down/up, pointer down/up).
//! `InputAdapter` turns them into the driver's input calls so the event
//! handlers themselves stay one line each.

use crate::driver::LoopDriver;
use crate::sim::GamePhase;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Enter,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }

    /// Whether the browser's default action (scrolling) should be suppressed
    pub fn blocks_default(&self) -> bool {
        matches!(self, Key::Left | Key::Right)
    }
}

/// DOM events that end a press on a hold button or the canvas
pub const POINTER_RELEASE_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "pointerleave"];

/// On-screen hold buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldButton {
    Left,
    Right,
}

/// Tracks held keys and forwards edges to the driver
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter {
    left: bool,
    right: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key, driver: &mut LoopDriver) {
        match key {
            Key::Left => {
                self.left = true;
                driver.set_direction(self.left, self.right);
            }
            Key::Right => {
                self.right = true;
                driver.set_direction(self.left, self.right);
            }
            Key::Enter => match driver.phase() {
                GamePhase::Idle => driver.request_start(),
                GamePhase::GameOver => driver.request_restart(),
                GamePhase::Running => {}
            },
        }
    }

    pub fn key_up(&mut self, key: Key, driver: &mut LoopDriver) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Enter => return,
        }
        driver.set_direction(self.left, self.right);
    }

    /// Pointer pressed on a hold button: that direction only
    pub fn button_down(&mut self, button: HoldButton, driver: &mut LoopDriver) {
        let (left, right) = match button {
            HoldButton::Left => (true, false),
            HoldButton::Right => (false, true),
        };
        self.set(left, right, driver);
    }

    /// Pointer pressed on the canvas: the half that was hit picks the direction
    pub fn canvas_down(&mut self, offset_x: f32, canvas_width: f32, driver: &mut LoopDriver) {
        if offset_x < canvas_width / 2.0 {
            self.button_down(HoldButton::Left, driver);
        } else {
            self.button_down(HoldButton::Right, driver);
        }
    }

    /// Pointer released, cancelled or left the element
    pub fn pointer_up(&mut self, driver: &mut LoopDriver) {
        self.set(false, false, driver);
    }

    fn set(&mut self, left: bool, right: bool, driver: &mut LoopDriver) {
        self.left = left;
        self.right = right;
        driver.set_direction(left, right);
    }
}

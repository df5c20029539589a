//! Platform abstraction layer
//!
//! Handles the parts that differ between the browser and headless runs:
//! - Frame timestamps and delta time
//! - Input edges from keys, buttons and pointers

pub mod clock;
pub mod input;

pub use clock::{FixedCadence, FrameClock, FrameSource};
pub use input::{HoldButton, InputAdapter, Key, POINTER_RELEASE_EVENTS};

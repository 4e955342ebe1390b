//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s through
//! `platform::winit`.

pub mod platform;

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, KeyEvent, KeyState, TouchEvent, TouchPhase};

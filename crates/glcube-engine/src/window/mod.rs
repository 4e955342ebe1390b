//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single `GlWindow`, and drives the
//! application contract from `core`.

mod display;
mod lifecycle;
mod runtime;

pub use display::screen_size;
pub use runtime::{Runtime, RuntimeConfig};

//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application shell. The runtime owns the surface and hands it to the
//! application explicitly on every callback.

mod app;
mod surface;

pub use app::{App, AppControl, EventSink, GlCallbacks};
pub use surface::{Size, Surface};

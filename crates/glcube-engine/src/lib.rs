//! glcube engine crate.
//!
//! This crate owns the platform pieces used by the shell: the winit event
//! loop, the EGL window + GLES context, input translation and orientation.

pub mod core;
pub mod device;
pub mod input;
pub mod orientation;
pub mod window;

pub mod logging;

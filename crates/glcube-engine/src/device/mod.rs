//! GL device + surface management.
//!
//! This module is responsible for:
//! - choosing an EGL config (depth/stencil/MSAA, GLES version)
//! - creating the window hidden, its double-buffered window surface and a GLES context
//! - resizing and presenting that surface

mod error;
mod gl_window;
mod init;

pub use error::{classify_swap_error, SurfaceErrorAction};
pub use gl_window::GlWindow;
pub use init::{GlInit, GlesVersion};

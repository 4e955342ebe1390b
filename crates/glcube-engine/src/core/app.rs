use crate::input::{KeyEvent, TouchEvent};

use super::surface::{Size, Surface};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Surface events delivered to the application.
///
/// Handlers run on the event-loop thread, one at a time.
pub trait EventSink {
    /// Called after the surface was resized and its GL surface reconfigured.
    fn on_resize(&mut self, surface: &dyn Surface, size: Size) -> AppControl {
        let _ = (surface, size);
        AppControl::Continue
    }

    /// Called for every key press, release and repeat.
    fn on_key(&mut self, surface: &dyn Surface, event: &KeyEvent) -> AppControl {
        let _ = (surface, event);
        AppControl::Continue
    }

    /// Called for every touch point transition.
    fn on_touch(&mut self, surface: &dyn Surface, event: &TouchEvent) -> AppControl {
        let _ = (surface, event);
        AppControl::Continue
    }
}

/// GL lifecycle callbacks registered with the surface.
///
/// The runtime invokes them with the GL context current:
/// `init_gl` once before the first frame, `render_frame_gl` every frame and
/// `terminate_gl` once at shutdown (only if `init_gl` ran).
pub trait GlCallbacks {
    fn init_gl(&mut self);

    /// Returns the renderer's frame status.
    fn render_frame_gl(&mut self) -> i32;

    fn terminate_gl(&mut self);
}

/// Application contract implemented by the shell.
pub trait App: EventSink + GlCallbacks {
    /// Called once, after the surface exists (hidden) and before any other
    /// callback. `screen` is the display size reported by the platform.
    fn on_create(&mut self, surface: &mut dyn Surface, screen: Size) -> AppControl;
}

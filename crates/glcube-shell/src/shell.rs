//! Event-to-renderer adapter.
//!
//! `CubeShell` has no state of its own: every surface event becomes a fixed
//! call (or none) on the renderer.

use glcube_engine::core::{App, AppControl, EventSink, GlCallbacks, Size, Surface};
use glcube_engine::input::{Key, KeyEvent, KeyState, TouchEvent, TouchPhase};
use glcube_engine::orientation::Orientation;

use crate::renderer::{CubeRenderer, TOUCH_DOWN, TOUCH_UP};

/// Rotation angle in degrees forwarded for an orientation.
pub fn rotation_angle(orientation: Orientation) -> i32 {
    match orientation {
        Orientation::Portrait => 0,
        Orientation::LandscapeInverse => 270,
        Orientation::PortraitInverse => 180,
        Orientation::Landscape => 90,
    }
}

/// Rotation step for a directional key.
pub fn rotation_delta(key: &Key) -> Option<(i32, i32)> {
    match key {
        Key::Up => Some((0, 1)),
        Key::Down => Some((0, -1)),
        Key::Left => Some((-1, 0)),
        Key::Right => Some((1, 0)),
        _ => None,
    }
}

pub struct CubeShell<R: CubeRenderer> {
    renderer: R,
}

impl<R: CubeRenderer> CubeShell<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }
}

impl<R: CubeRenderer> EventSink for CubeShell<R> {
    fn on_resize(&mut self, surface: &dyn Surface, size: Size) -> AppControl {
        let orientation = surface.current_orientation();
        log::debug!("resized to {}x{}, orientation {orientation}", size.width, size.height);

        self.renderer.update_window_rotation_angle(rotation_angle(orientation));
        self.renderer.update_window_size(size.width, size.height);
        AppControl::Continue
    }

    fn on_key(&mut self, _surface: &dyn Surface, event: &KeyEvent) -> AppControl {
        if event.state != KeyState::Down {
            return AppControl::Continue;
        }

        match &event.key {
            Key::Back | Key::Escape => return AppControl::Exit,
            key => {
                if let Some((dx, dy)) = rotation_delta(key) {
                    self.renderer.rotation_cube(dx, dy);
                }
            }
        }
        AppControl::Continue
    }

    fn on_touch(&mut self, _surface: &dyn Surface, event: &TouchEvent) -> AppControl {
        if event.point != 0 {
            return AppControl::Continue;
        }

        match event.phase {
            TouchPhase::Released => self.renderer.update_touch_event_state(TOUCH_UP),
            TouchPhase::Pressed => self.renderer.update_touch_event_state(TOUCH_DOWN),
            TouchPhase::Moved => {
                // `as` truncates toward zero.
                self.renderer.update_touch_position(event.x as i32, event.y as i32);
            }
            TouchPhase::Interrupted => {}
        }
        AppControl::Continue
    }
}

impl<R: CubeRenderer> GlCallbacks for CubeShell<R> {
    fn init_gl(&mut self) {
        log::info!("initializing renderer");
        self.renderer.initialize_gl();
    }

    fn render_frame_gl(&mut self) -> i32 {
        self.renderer.render_frame_gl()
    }

    fn terminate_gl(&mut self) {
        log::info!("terminating renderer");
        self.renderer.terminate_gl();
    }
}

impl<R: CubeRenderer> App for CubeShell<R> {
    fn on_create(&mut self, surface: &mut dyn Surface, screen: Size) -> AppControl {
        log::info!("starting with screen {}x{}", screen.width, screen.height);

        self.renderer.update_window_size(screen.width, screen.height);
        surface.set_available_orientations(&Orientation::ALL);
        surface.show();
        AppControl::Continue
    }
}

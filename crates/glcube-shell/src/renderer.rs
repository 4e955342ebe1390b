//! The native renderer boundary.

/// Touch-state code for a press.
pub const TOUCH_DOWN: i32 = 1;
/// Touch-state code for a release.
pub const TOUCH_UP: i32 = 2;

/// The eight entry points of the external cube renderer.
///
/// Parameters mirror the C ABI exactly. All calls are infallible.
pub trait CubeRenderer {
    /// `initializeGL`: once, before the first frame.
    fn initialize_gl(&mut self);

    /// `renderFrameGL`: every frame; returns the renderer's status.
    fn render_frame_gl(&mut self) -> i32;

    /// `terminateGL`: once, at shutdown.
    fn terminate_gl(&mut self);

    /// `updateTouchEventState`: `TOUCH_DOWN` or `TOUCH_UP`.
    fn update_touch_event_state(&mut self, state: i32);

    /// `updateTouchPosition`: screen coordinates.
    fn update_touch_position(&mut self, x: i32, y: i32);

    /// `rotationCube`: components in {-1, 0, 1}.
    fn rotation_cube(&mut self, dx: i32, dy: i32);

    /// `updateWindowSize`
    fn update_window_size(&mut self, width: i32, height: i32);

    /// `updateWindowRotationAngle`: one of 0, 90, 180, 270.
    fn update_window_rotation_angle(&mut self, angle: i32);
}

use std::ffi::c_int;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use libloading::Library;

use crate::renderer::CubeRenderer;

/// File name of the renderer library as installed on the device.
pub const DEFAULT_LIBRARY: &str = "libdali-nativegl-library.so.0.0.1";

type VoidFn   = unsafe extern "C" fn();
type StatusFn = unsafe extern "C" fn() -> c_int;
type IntFn    = unsafe extern "C" fn(c_int);
type PairFn   = unsafe extern "C" fn(c_int, c_int);

/// The renderer library, loaded once with every entry point resolved.
///
/// The function pointers stay valid while `_library` is alive; both live
/// and die together in this struct.
pub struct NativeCubeLibrary {
    path: PathBuf,

    initialize_gl:                VoidFn,
    render_frame_gl:              StatusFn,
    terminate_gl:                 VoidFn,
    update_touch_event_state:     IntFn,
    update_touch_position:        PairFn,
    rotation_cube:                PairFn,
    update_window_size:           PairFn,
    update_window_rotation_angle: IntFn,

    _library: Library,
}

impl NativeCubeLibrary {
    /// Loads the library and resolves all eight entry points.
    ///
    /// A missing library or symbol is an error naming what was not found.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // SAFETY: loading runs the library's initializers; the renderer
        // library has none beyond its static GL state.
        let library = unsafe { Library::new(&path) }
            .with_context(|| format!("failed to load renderer library {}", path.display()))?;

        // Older builds export the misspelt `intializeGL`.
        let initialize_gl = resolve::<VoidFn>(&library, &["initializeGL", "intializeGL"])?;

        let this = Self {
            initialize_gl,
            render_frame_gl:              resolve(&library, &["renderFrameGL"])?,
            terminate_gl:                 resolve(&library, &["terminateGL"])?,
            update_touch_event_state:     resolve(&library, &["updateTouchEventState"])?,
            update_touch_position:        resolve(&library, &["updateTouchPosition"])?,
            rotation_cube:                resolve(&library, &["rotationCube"])?,
            update_window_size:           resolve(&library, &["updateWindowSize"])?,
            update_window_rotation_angle: resolve(&library, &["updateWindowRotationAngle"])?,
            path,
            _library: library,
        };

        log::info!("loaded renderer library {}", this.path.display());
        Ok(this)
    }
}

/// Resolves the first symbol of `names` that the library exports.
fn resolve<T: Copy>(library: &Library, names: &[&str]) -> Result<T> {
    let mut last_err = None;
    for name in names {
        // SAFETY: `T` is one of the `extern "C"` pointer types above, matching
        // the renderer's exported signatures.
        match unsafe { library.get::<T>(name.as_bytes()) } {
            Ok(symbol) => return Ok(*symbol),
            Err(e) => last_err = Some(e),
        }
    }

    let primary = names.first().copied().unwrap_or_default();
    match last_err {
        Some(e) => Err(e).with_context(|| format!("renderer library does not export `{primary}`")),
        None => anyhow::bail!("no symbol name given"),
    }
}

// SAFETY (all calls below): the pointers were resolved from `_library`, which
// is still loaded, and the renderer is only called from the event-loop thread.
impl CubeRenderer for NativeCubeLibrary {
    fn initialize_gl(&mut self) {
        unsafe { (self.initialize_gl)() }
    }

    fn render_frame_gl(&mut self) -> i32 {
        unsafe { (self.render_frame_gl)() }
    }

    fn terminate_gl(&mut self) {
        unsafe { (self.terminate_gl)() }
    }

    fn update_touch_event_state(&mut self, state: i32) {
        unsafe { (self.update_touch_event_state)(state) }
    }

    fn update_touch_position(&mut self, x: i32, y: i32) {
        unsafe { (self.update_touch_position)(x, y) }
    }

    fn rotation_cube(&mut self, dx: i32, dy: i32) {
        unsafe { (self.rotation_cube)(dx, dy) }
    }

    fn update_window_size(&mut self, width: i32, height: i32) {
        unsafe { (self.update_window_size)(width, height) }
    }

    fn update_window_rotation_angle(&mut self, angle: i32) {
        unsafe { (self.update_window_rotation_angle)(angle) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_an_error() {
        let err = NativeCubeLibrary::load("/nonexistent/libglcube-missing.so")
            .err()
            .expect("loading a missing library must fail");
        assert!(format!("{err:#}").contains("libglcube-missing.so"));
    }
}

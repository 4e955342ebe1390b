use anyhow::{bail, Context, Result};
use winit::event_loop::ActiveEventLoop;

use crate::core::Size;

/// Queries the display size from the platform.
///
/// Uses the primary monitor, or the first available one on platforms that do
/// not designate a primary (Wayland).
pub fn screen_size(event_loop: &ActiveEventLoop) -> Result<Size> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .context("no display available to query screen dimensions")?;

    let size: Size = monitor.size().into();
    if size.is_empty() {
        bail!("display {:?} reports an empty size {}x{}", monitor.name(), size.width, size.height);
    }

    log::info!("screen size {}x{} ({:?})", size.width, size.height, monitor.name());
    Ok(size)
}

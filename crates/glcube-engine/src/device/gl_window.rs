use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{
    GlSurface, Surface as EglSurface, SurfaceAttributesBuilder, SwapInterval, WindowSurface,
};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::core::{Size, Surface};
use crate::orientation::Orientation;

use super::GlInit;

/// The application's single window with its EGL surface and current GLES context.
///
/// Field order is drop order: the context and surface go before the window.
pub struct GlWindow {
    context:     PossiblyCurrentContext,
    egl_surface: EglSurface<WindowSurface>,
    window:      Window,

    available: Vec<Orientation>,
}

impl GlWindow {
    /// Creates the window hidden, then its surface and context, and makes the
    /// context current on the calling thread.
    ///
    /// Without an explicit `size` the window is borderless fullscreen.
    pub fn new(
        event_loop: &ActiveEventLoop,
        title: &str,
        size: Option<PhysicalSize<u32>>,
        init: &GlInit,
    ) -> Result<Self> {
        let attrs = window_attributes(title, size);

        let mut template = ConfigTemplateBuilder::new()
            .with_api(init.gles_version.config_api())
            .with_depth_size(init.depth_bits)
            .with_stencil_size(init.stencil_bits);
        if init.msaa_samples > 0 {
            template = template.with_multisampling(init.msaa_samples);
        }

        let (window, config) = DisplayBuilder::new()
            .with_preference(init.api_preference)
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                // glutin reports "no matching config" as an error before the
                // picker runs, so the iterator holds at least one config.
                most_samples(configs, |c| c.num_samples())
                    .expect("display builder offers at least one matching config")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

        let window = window.context("display builder returned no window")?;
        log::info!(
            "GL config: depth={} stencil={} samples={}",
            config.depth_size(),
            config.stencil_size(),
            config.num_samples(),
        );

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let display = config.display();
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(init.gles_version.context_version())))
            .build(Some(raw_handle));

        // SAFETY: `raw_handle` belongs to `window`, which outlives the context
        // (field drop order).
        let not_current = unsafe { display.create_context(&config, &context_attrs) }
            .context("failed to create GLES context")?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new().with_single_buffer(false))
            .context("failed to describe window surface")?;

        // SAFETY: as above, the window outlives the surface.
        let egl_surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&egl_surface)
            .context("failed to make GLES context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = egl_surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        Ok(Self {
            context,
            egl_surface,
            window,
            available: Vec::new(),
        })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Resizes the GL surface. Zero-sized (minimized) windows are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        self.egl_surface.resize(&self.context, w, h);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> glutin::error::Result<()> {
        self.window.pre_present_notify();
        self.egl_surface.swap_buffers(&self.context)
    }
}

impl Surface for GlWindow {
    fn size(&self) -> Size {
        self.window.inner_size().into()
    }

    fn current_orientation(&self) -> Orientation {
        presented_orientation(&self.available)
    }

    fn set_available_orientations(&mut self, orientations: &[Orientation]) {
        log::debug!("available orientations: {orientations:?}");
        self.available = orientations.to_vec();
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.window.request_redraw();
    }
}

/// Winit exposes no display rotation and the compositor presents the window
/// upright, so the window is always in its natural orientation.
fn presented_orientation(available: &[Orientation]) -> Orientation {
    Orientation::resolve(Orientation::default(), available)
}

fn window_attributes(title: &str, size: Option<PhysicalSize<u32>>) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(title)
        .with_visible(false);

    match size {
        Some(size) => attrs.with_inner_size(size),
        None => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

/// Picks the item with the most samples; ties keep the earliest.
fn most_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, c| if samples(&c) > samples(&best) { c } else { best })
}

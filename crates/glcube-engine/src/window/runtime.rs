use anyhow::{anyhow, Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl, Size};
use crate::device::{classify_swap_error, GlInit, GlWindow, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputEvent, InputState};

use super::display::screen_size;
use super::lifecycle::GlLifecycle;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Initial inner size in physical pixels. `None` opens a borderless
    /// fullscreen window.
    pub initial_size: Option<PhysicalSize<u32>>,

    pub gl: GlInit,

    /// Drive the primary touch point with the left mouse button.
    pub mouse_as_touch: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title:          "glcube".to_string(),
            initial_size:   None,
            gl:             GlInit::default(),
            mouse_as_touch: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the application exits.
    ///
    /// Returns the first fatal error raised while creating the surface or
    /// presenting a frame.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app:    A,

    /// The single surface; created on first resume, never replaced.
    window: Option<GlWindow>,
    input:  InputState,

    lifecycle:      GlLifecycle,
    exit_requested: bool,
    fatal:          Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            input: InputState::default(),
            lifecycle: GlLifecycle::default(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.request_exit(event_loop);
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<AppControl> {
        let screen = screen_size(event_loop)?;
        let window = self.window.insert(GlWindow::new(
            event_loop,
            &self.config.title,
            self.config.initial_size,
            &self.config.gl,
        )?);

        Ok(self.app.on_create(window, screen))
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let Some(status) = self.lifecycle.frame(&mut self.app) else {
            return;
        };
        log::trace!("frame status {status}");

        if let Err(err) = window.swap_buffers() {
            match classify_swap_error(&err.error_kind()) {
                SurfaceErrorAction::SkipFrame => log::warn!("frame skipped: {err}"),
                SurfaceErrorAction::Fatal => {
                    self.fail(event_loop, anyhow!("failed to present frame: {err}"));
                }
            }
        }
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, control: AppControl) {
        if control == AppControl::Exit {
            log::info!("exit requested by application");
            self.request_exit(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(control) => self.dispatch(event_loop, control),
            Err(e) => self.fail(event_loop, e.context("failed to create surface")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // The renderer owns animation; redraw continuously.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        let control = match &event {
            WindowEvent::CloseRequested => AppControl::Exit,

            WindowEvent::Resized(new_size) => {
                window.resize(*new_size);
                self.app.on_resize(window, Size::from(*new_size))
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                AppControl::Continue
            }

            _ => {
                let events = translate_window_event(&mut self.input, &event, self.config.mouse_as_touch);
                let mut control = AppControl::Continue;
                for ev in &events {
                    control = match ev {
                        InputEvent::Key(key) => self.app.on_key(window, key),
                        InputEvent::Touch(touch) => self.app.on_touch(window, touch),
                    };
                    if control == AppControl::Exit {
                        break;
                    }
                }
                control
            }
        };

        self.dispatch(event_loop, control);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        log::debug!("suspended");
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // The context is still current here; it is dropped with the window.
        self.lifecycle.terminate(&mut self.app);
        self.window = None;
        log::info!("surface destroyed");
    }
}

use crate::core::GlCallbacks;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
enum Stage {
    #[default]
    Pending,
    Running,
    Terminated,
}

/// Orders the GL lifecycle callbacks.
///
/// `init_gl` runs once, right before the first frame; `terminate_gl` runs at
/// most once and only after `init_gl`. No frame runs after termination.
#[derive(Debug, Default)]
pub(crate) struct GlLifecycle {
    stage: Stage,
}

impl GlLifecycle {
    /// Renders one frame, initializing first if needed.
    ///
    /// Returns the frame status, or `None` once terminated.
    pub(crate) fn frame<G: GlCallbacks + ?Sized>(&mut self, gl: &mut G) -> Option<i32> {
        match self.stage {
            Stage::Pending => {
                gl.init_gl();
                self.stage = Stage::Running;
            }
            Stage::Running => {}
            Stage::Terminated => return None,
        }
        Some(gl.render_frame_gl())
    }

    /// Ends the lifecycle. Terminates the renderer only if it was initialized.
    pub(crate) fn terminate<G: GlCallbacks + ?Sized>(&mut self, gl: &mut G) {
        if self.stage == Stage::Running {
            gl.terminate_gl();
        }
        self.stage = Stage::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        calls: Vec<&'static str>,
    }

    impl GlCallbacks for Counter {
        fn init_gl(&mut self) {
            self.calls.push("init");
        }

        fn render_frame_gl(&mut self) -> i32 {
            self.calls.push("render");
            1
        }

        fn terminate_gl(&mut self) {
            self.calls.push("terminate");
        }
    }

    #[test]
    fn first_frame_initializes_once() {
        let (mut lc, mut gl) = (GlLifecycle::default(), Counter::default());

        assert_eq!(lc.frame(&mut gl), Some(1));
        assert_eq!(lc.frame(&mut gl), Some(1));

        assert_eq!(gl.calls, ["init", "render", "render"]);
    }

    #[test]
    fn exit_without_frames_never_terminates() {
        let (mut lc, mut gl) = (GlLifecycle::default(), Counter::default());

        lc.terminate(&mut gl);

        assert!(gl.calls.is_empty());
    }

    #[test]
    fn double_exit_terminates_once() {
        let (mut lc, mut gl) = (GlLifecycle::default(), Counter::default());

        lc.frame(&mut gl);
        lc.terminate(&mut gl);
        lc.terminate(&mut gl);

        assert_eq!(gl.calls, ["init", "render", "terminate"]);
    }

    #[test]
    fn no_frames_after_termination() {
        let (mut lc, mut gl) = (GlLifecycle::default(), Counter::default());

        lc.terminate(&mut gl);
        assert_eq!(lc.frame(&mut gl), None);

        assert!(gl.calls.is_empty());
    }
}

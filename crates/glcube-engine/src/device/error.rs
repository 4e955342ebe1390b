use glutin::error::ErrorKind;

/// High-level response after a failed buffer swap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Transient error; skip the current frame.
    SkipFrame,
    /// The context or display is gone; terminate.
    Fatal,
}

/// Classifies an error returned by `swap_buffers`.
pub fn classify_swap_error(kind: &ErrorKind) -> SurfaceErrorAction {
    match kind {
        ErrorKind::ContextLost
        | ErrorKind::BadContext
        | ErrorKind::BadDisplay
        | ErrorKind::OutOfMemory => SurfaceErrorAction::Fatal,
        _ => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_context_is_fatal() {
        assert_eq!(classify_swap_error(&ErrorKind::ContextLost), SurfaceErrorAction::Fatal);
        assert_eq!(classify_swap_error(&ErrorKind::BadDisplay), SurfaceErrorAction::Fatal);
    }

    #[test]
    fn surface_errors_skip_the_frame() {
        assert_eq!(classify_swap_error(&ErrorKind::BadSurface), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_swap_error(&ErrorKind::BadNativeWindow), SurfaceErrorAction::SkipFrame);
    }
}

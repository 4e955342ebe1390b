use glutin::config::Api;
use glutin::context::Version;
use glutin_winit::ApiPreference;

/// GLES version requested from the context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlesVersion {
    V2_0,
    V3_0,
}

impl GlesVersion {
    pub(crate) fn context_version(self) -> Version {
        match self {
            GlesVersion::V2_0 => Version::new(2, 0),
            GlesVersion::V3_0 => Version::new(3, 0),
        }
    }

    pub(crate) fn config_api(self) -> Api {
        match self {
            GlesVersion::V2_0 => Api::GLES2,
            GlesVersion::V3_0 => Api::GLES3,
        }
    }
}

/// Initialization parameters for the GL layer.
///
/// The defaults describe a depth-buffered GLES 2.0 surface without stencil
/// or multisampling. Window surfaces are always double-buffered.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Depth buffer bits; 0 disables the depth buffer.
    pub depth_bits: u8,

    /// Stencil buffer bits; 0 disables the stencil buffer.
    pub stencil_bits: u8,

    /// MSAA sample count; 0 disables multisampling.
    pub msaa_samples: u8,

    pub gles_version: GlesVersion,

    /// Block swaps on vsync.
    pub vsync: bool,

    /// Display API preference. EGL is preferred; other APIs are a fallback
    /// on platforms without EGL.
    pub api_preference: ApiPreference,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            depth_bits:     24,
            stencil_bits:   0,
            msaa_samples:   0,
            gles_version:   GlesVersion::V2_0,
            vsync:          true,
            api_preference: ApiPreference::PreferEgl,
        }
    }
}

impl GlInit {
    /// Depth- and optionally stencil-buffered surface at a fixed GLES version.
    pub fn with_buffers(depth: bool, stencil: bool, msaa_samples: u8, gles_version: GlesVersion) -> Self {
        Self {
            depth_bits: if depth { 24 } else { 0 },
            stencil_bits: if stencil { 8 } else { 0 },
            msaa_samples,
            gles_version,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_depth_buffered_gles2() {
        let init = GlInit::default();
        assert_eq!(init.depth_bits, 24);
        assert_eq!(init.stencil_bits, 0);
        assert_eq!(init.gles_version, GlesVersion::V2_0);
    }

    #[test]
    fn with_buffers_toggles_bits() {
        let init = GlInit::with_buffers(false, true, 4, GlesVersion::V3_0);
        assert_eq!(init.depth_bits, 0);
        assert_eq!(init.stencil_bits, 8);
        assert_eq!(init.msaa_samples, 4);
        assert_eq!(init.gles_version.context_version(), Version::new(3, 0));
    }
}

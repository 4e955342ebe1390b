use std::path::PathBuf;

use crate::native::DEFAULT_LIBRARY;

/// Overrides the renderer library path.
pub const LIBRARY_VAR: &str = "GLCUBE_NATIVE_LIBRARY";
/// Log filter in `env_logger` syntax; takes precedence over `RUST_LOG`.
pub const LOG_VAR: &str = "GLCUBE_LOG";

/// Shell settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub library:    PathBuf,
    pub log_filter: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            library:    PathBuf::from(DEFAULT_LIBRARY),
            log_filter: None,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(library) = get(LIBRARY_VAR) {
            config.library = PathBuf::from(library);
        }
        config.log_filter = get(LOG_VAR);
        config
    }
}

mod config;
mod native;
mod renderer;
mod shell;

use anyhow::Result;

use glcube_engine::device::{GlInit, GlesVersion};
use glcube_engine::logging::{init_logging, LoggingConfig};
use glcube_engine::window::{Runtime, RuntimeConfig};

use crate::config::ShellConfig;
use crate::native::NativeCubeLibrary;
use crate::shell::CubeShell;

fn main() -> Result<()> {
    let config = ShellConfig::from_env();

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let renderer = NativeCubeLibrary::load(&config.library)?;

    let runtime = RuntimeConfig {
        title: "GLCube".to_string(),
        gl: GlInit::with_buffers(true, true, 0, GlesVersion::V2_0),
        ..RuntimeConfig::default()
    };

    Runtime::run(runtime, CubeShell::new(renderer))
}

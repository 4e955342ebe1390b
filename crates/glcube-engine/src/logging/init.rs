use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "glcube_shell=debug,glutin=warn"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter:    Option<String>,
    pub default_level: LevelFilter,
    pub write_style:   env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter:    None,
            default_level: LevelFilter::Info,
            write_style:   env_logger::WriteStyle::Auto,
        }
    }
}

/// Windowing crates that are noisy at `info`.
const QUIET_MODULES: [&str; 3] = ["winit", "glutin", "glutin_winit"];

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
                for module in QUIET_MODULES {
                    builder.filter_module(module, LevelFilter::Warn);
                }
            }
        }

        builder.write_style(config.write_style);
        builder.format_timestamp_millis();
        builder.init();

        log::debug!("logging initialized");
    });
}

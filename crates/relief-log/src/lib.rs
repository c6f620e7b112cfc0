//! Structured logging setup.
//!
//! Console output with timestamps and module paths via the `tracing`
//! ecosystem, plus optional JSON file logging in debug builds. The
//! filter respects `RUST_LOG` and can be overridden from the config
//! system.

use std::path::Path;

use relief_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// * `log_dir` - optional directory for a JSON log file (debug builds only)
/// * `debug_build` - whether this is a debug build (enables file logging)
/// * `config` - optional configuration whose `debug.log_level` overrides
///   the default filter
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or("info")
        .to_string();

    // RUST_LOG wins over the configured level.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("relief.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The default filter used when neither `RUST_LOG` nor the config
/// provides one.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

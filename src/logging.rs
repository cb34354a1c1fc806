//! Logging configuration for spreadit
//!
//! stdout carries the JSON result of each command, so console logs go to
//! stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::Result;

/// Build the filter for `level`, letting `RUST_LOG` win when set
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,spreadit={level}")))
}

/// Initialize logging from configuration.
///
/// `verbose` forces debug level. When `log_dir` is configured a daily-rolling
/// file layer is added; the returned guard must be held until exit so that
/// buffered lines are flushed.
pub fn init_logging_with_config(
    config: &LoggingConfig,
    verbose: bool,
) -> Result<Option<WorkerGuard>> {
    let level = if verbose { "debug" } else { config.level.as_str() };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .boxed();

    let (file, guard) = match &config.log_dir {
        Some(dir) => {
            let (layer, guard) = file_layer(dir)?;
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // The filter is global, so its position in the stack does not matter
    Registry::default()
        .with(file)
        .with(console_layer)
        .with(env_filter(level))
        .try_init()
        .map_err(|e| {
            crate::SpreadItError::ConfigError(format!("logging already initialized: {e}"))
        })?;

    tracing::debug!("Logging initialized with level: {}", level);
    if let Some(dir) = &config.log_dir {
        tracing::debug!("Log files will be saved to: {}/spreadit.log.YYYY-MM-DD", dir.display());
    }

    Ok(guard)
}

fn file_layer(dir: &Path) -> Result<(Box<dyn Layer<Registry> + Send + Sync>, WorkerGuard)> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }

    let file_appender = tracing_appender::rolling::daily(dir, "spreadit.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_ansi(false) // No colors in file
        .boxed();

    Ok((layer, guard))
}

/// Initialize simple logging for testing
pub fn init_simple_logging() {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

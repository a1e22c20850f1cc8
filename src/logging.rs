//! Structured logging setup.
//!
//! The terminal is taken over by the game while it runs, so log records go to a file in the
//! operating system's temporary directory instead of standard output.

use std::env;

use color_eyre::eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Name of the log file created in the temporary directory.
const LOG_FILE_NAME: &str = "twenty48.log";

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Records are filtered through `RUST_LOG`, falling back to `info`, and written without ANSI
/// escapes by a background writer. The returned guard flushes pending records when dropped, so
/// the caller must keep it alive for as long as the game runs.
///
/// # Errors
///
/// This function returns an error if a global subscriber has already been installed.
pub fn init_logging() -> Result<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = tracing_appender::rolling::never(env::temp_dir(), LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(
        path = %env::temp_dir().join(LOG_FILE_NAME).display(),
        "logging initialized"
    );

    Ok(guard)
}

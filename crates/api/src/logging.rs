//! Tracing subscriber setup.
//!
//! Everything the env filter lets through goes to stdout. Error-level events
//! are also appended to `app-error.log.YYYY-MM-DD` in the configured log
//! directory, rotated daily.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// File name prefix of the rotated error log.
pub const ERROR_LOG_PREFIX: &str = "app-error.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.filter` when both are set. The returned guard
/// flushes the error log on drop and must be held for the lifetime of the
/// process.
pub fn init_tracing(config: &LogConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.dir, ERROR_LOG_PREFIX);
    let (error_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(error_writer.with_max_level(Level::ERROR)),
        )
        .init();

    guard
}

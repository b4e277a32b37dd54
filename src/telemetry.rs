use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::configuration::LoggerSettings;

const LOG_FILE_PREFIX: &str = "change-password.log";

/// The returned guard must be kept alive while the log file is written.
pub fn init(logger: &LoggerSettings) -> Option<WorkerGuard> {
    let filter = || env_filter(&logger.level);

    // console layer for tracing-subscriber
    let console = fmt::Layer::new()
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .with_filter(filter());

    // file appender layer for tracing-subscriber
    let (file, guard) = match &logger.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file = fmt::Layer::new()
                .with_writer(non_blocking)
                .json()
                .with_filter(filter());
            (Some(file), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();
    guard
}

// RUST_LOG wins over the configured level
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level))
}

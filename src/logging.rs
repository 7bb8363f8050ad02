use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up tracing: human-readable lines on stdout, JSON records in a
/// daily-rotated file under `logs/`. `RUST_LOG` can raise or lower the
/// default `tool_polisher=info` filter.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "tool_polisher.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("tool_polisher=info".parse().unwrap()))
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    // The appender guard must outlive the process or buffered records are dropped
    std::mem::forget(guard);
}

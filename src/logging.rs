use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

const DEFAULT_DIRECTIVE: &str = "mazegen=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Logs go to stderr, or to `log_file` through
/// a background writer when given. Keep the returned guard alive until exit so
/// buffered lines get flushed.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = std::fs::File::create(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    tracing::debug!("[logging] writing to {}", path.display());
    Ok(Some(guard))
}

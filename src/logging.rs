//! Tracing subscriber setup.
//!
//! Console output is always on. When a log directory is configured, a second
//! layer writes plain-text records to a daily rolling file.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "homework_watch=info";

const LOG_FILE_PREFIX: &str = "homework-watch";
const LOG_FILE_SUFFIX: &str = "log";

/// Daily files kept on disk; older ones are deleted on rotation.
pub const MAX_LOG_FILES: usize = 5;

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file records are lost.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = file_appender(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to set global default subscriber: {e}"))?;

    Ok(guard)
}

/// Daily rolling appender that keeps at most [`MAX_LOG_FILES`] files in `dir`.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?;
    Ok(appender)
}

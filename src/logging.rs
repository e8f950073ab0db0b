//! Process-wide logging setup

use chrono::Local;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::{FpBenchError, Result};

/// Timestamp layout for log lines
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d:%H:%M:%S,%3f";

/// Local wall-clock timestamps in [`LOG_TIME_FORMAT`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTimer;

impl FormatTime for LogTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(LOG_TIME_FORMAT))
    }
}

/// Install the global subscriber: INFO and above, with timestamp, level,
/// source file and line, written to stderr.
///
/// Fails if a global subscriber is already set.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_timer(LogTimer)
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| FpBenchError::ConfigError(format!("Failed to install logger: {}", e)))
}

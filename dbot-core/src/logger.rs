//! Logging initialization: plain-text lines (local time, level, target, fields) to both console and a log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::{format::Writer, time::FormatTime, writer::MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Local time as `YYYY-MM-DD HH:MM:SS`.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the global subscriber, teeing stdout and `log_file_path` (parent directory created if missing).
/// Level from `RUST_LOG`, default `info`. Errors if a global subscriber is already set.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = Arc::new(
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)?,
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stdout.and(file))
        .with_timer(LocalTime)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_file_and_rejects_second_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dbot.log");
        let path = path.to_str().unwrap();

        init_tracing(path).unwrap();
        assert!(Path::new(path).exists());

        // Global subscriber is already set.
        assert!(init_tracing(path).is_err());
    }
}

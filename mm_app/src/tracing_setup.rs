use std::io;
use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Logging destinations for a process
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub app_name: String,
    /// Hourly rolling log files go here when set
    pub log_dir: Option<PathBuf>,
    /// Used when `RUST_LOG` is unset
    pub default_level: Level,
}

impl LogOptions {
    pub fn new(app_name: &str) -> Self {
        Self { app_name: app_name.to_string(), log_dir: None, default_level: Level::INFO }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    /// File name prefix for the rolling appender
    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.app_name)
    }
}

/// Install the global subscriber: compact stdout, plus a non-blocking file layer if configured
///
/// Hold the returned guard until shutdown so buffered file output is flushed.
pub fn init(options: &LogOptions) -> Option<WorkerGuard> {
    // Respects RUST_LOG, falls back to default_level
    let env_filter = EnvFilter::builder().with_default_directive(options.default_level.into()).from_env_lossy();

    // Stdout layer (with ANSI colors for readability)
    let stdout_layer = fmt::layer().with_writer(io::stdout).with_target(true).with_line_number(true).with_ansi(true).compact();

    let (file_layer, guard) = match &options.log_dir {
        Some(log_dir) => {
            // Create log directory if it doesn't exist
            let _ = std::fs::create_dir_all(log_dir);
            // Background thread handles all file I/O
            let file_appender = tracing_appender::rolling::hourly(log_dir, options.log_file_name());
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer =
                fmt::layer().with_writer(non_blocking).with_target(true).with_thread_ids(true).with_line_number(true).with_ansi(false).compact();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // `Option<Layer>` is a no-op layer when `None`
    tracing_subscriber::registry().with(env_filter).with(stdout_layer).with(file_layer).init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = LogOptions { default_level: Level::DEBUG, ..LogOptions::new("mm_notifier").with_log_dir("logs") };
        assert_eq!(options.log_file_name(), "mm_notifier.log");
        assert_eq!(options.log_dir, Some(PathBuf::from("logs")));
        assert_eq!(options.default_level, Level::DEBUG);
    }

    #[test]
    fn test_defaults_to_stdout_only() {
        let options = LogOptions::new("mm_notifier");
        assert!(options.log_dir.is_none());
        assert_eq!(options.default_level, Level::INFO);
    }
}

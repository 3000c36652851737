//! Tracing setup
//!
//! Logs go to a file under the data directory; stdout and stderr belong
//! to the terminal UI while it is running. The returned guard must stay
//! alive for the duration of the program or buffered log lines are lost.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the global tracing subscriber. Falls back to stderr when
/// the log file cannot be opened (the TUI will overdraw it, but startup
/// is never blocked on logging).
pub fn init() -> Option<WorkerGuard> {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    let log_file = crate::config::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
            .map(|file| (path, file))
    });

    match log_file {
        Some((path, file)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .init();
            tracing::warn!("failed to open log file; using stderr");
            None
        }
    }
}

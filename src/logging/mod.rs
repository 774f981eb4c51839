//! Application logging functionality
//!
//! Installs the `tracing` subscriber and handles log file management

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "panelcut=info";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Standard error, keeping stdout free for JSON output
    #[default]
    Stderr,
    /// Daily file under the logs directory
    File,
}

/// Get the path to the panelcut config directory
pub fn config_dir() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    config_dir.join("panelcut")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

fn log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    format!("panelcut-{timestamp}.log")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(log_file_name())
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// The returned guard flushes buffered output when dropped, so the caller
/// keeps it alive for the whole run.
pub fn init(target: LogTarget) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = match target {
        LogTarget::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogTarget::File => {
            initialize_logs_directory()?;
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(current_log_file())
                .context("Failed to open log file")?;
            tracing_appender::non_blocking(file)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(target == LogTarget::Stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    if target == LogTarget::File {
        tracing::info!(
            "=== panelcut started at {} ===",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(guard)
}

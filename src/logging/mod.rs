//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily file named
//! `tallypad_<date>.log` in the configured directory. Disabled by default;
//! `RUST_LOG` overrides the configured filter when set.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
fn expand_log_dir(dir: &str) -> PathBuf {
    if dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(dir.trim_start_matches('~').trim_start_matches('/'));
        }
    }
    PathBuf::from(dir)
}

/// Install the global file subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_log_dir(&config.log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("tallypad_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_log_dir_absolute_path_unchanged() {
        assert_eq!(expand_log_dir("/var/log/tallypad"), PathBuf::from("/var/log/tallypad"));
        assert_eq!(expand_log_dir("logs"), PathBuf::from("logs"));
    }

    #[test]
    fn test_expand_log_dir_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs"), home.join("logs"));
            assert_eq!(expand_log_dir("~/a/b"), home.join("a/b"));
        }
    }
}

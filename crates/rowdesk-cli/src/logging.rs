// Logging setup, powered by tracing-subscriber.
//
// Console commands log to stderr so stdout stays clean for tables and JSON.
// The interactive table owns the terminal, so `browse` logs to a file in the
// data directory instead.

use crate::types::LogLevel;
use anyhow::{Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "rowdesk.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `RUST_LOG` wins when set; otherwise `level` applies to our crates and
/// everything else stays at warn.
fn build_env_filter(level: LogLevel) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = [
        "warn".to_string(),
        format!("rowdesk={}", level),
        format!("rowdesk_runtime={}", level),
        format!("rowdesk_index={}", level),
    ]
    .join(",");

    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("Invalid tracing filter '{}': {}", directives, e))
}

pub fn init_logging(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = build_env_filter(level)?;

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // A subscriber may already be installed (tests embedding the CLI); keep it.
    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already set: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_names_workspace_crates() {
        // SAFETY: tests in this module do not read RUST_LOG concurrently.
        unsafe { std::env::remove_var("RUST_LOG") };

        let filter = build_env_filter(LogLevel::Debug).unwrap().to_string();
        assert!(filter.contains("rowdesk=debug"));
        assert!(filter.contains("rowdesk_index=debug"));
    }
}

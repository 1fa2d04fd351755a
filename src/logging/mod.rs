//! Diagnostic logging to disk.
//!
//! The alternate screen owns stdout, so tracing output is written to a file
//! and only when enabled in `[logging]` or through `CRABSAGA_LOG=<path>`.
//! `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where logs should go, or `None` when logging is off.
pub fn log_target(config: &LoggingConfig) -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CRABSAGA_LOG") {
        return Some(PathBuf::from(path));
    }
    config.enabled.then(|| config.file.clone())
}

pub fn init_tracing(config: &LoggingConfig) {
    let Some(path) = log_target(config) else {
        return;
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialized");
}

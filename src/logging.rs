//! Tracing setup
//!
//! Logs go to a file next to the settings. The TUI owns stdout, so if the
//! file can't be opened logging is dropped instead of falling back to the
//! terminal.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Settings, TrackerPaths};

/// Build the log filter: `RUST_LOG` wins, then the configured level, then `info`
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Returns the log file path when file logging is active.
pub fn init_logging(paths: &TrackerPaths, settings: &Settings) -> Option<PathBuf> {
    let filter = build_filter(&settings.log_level);

    match open_log_file(&paths.log_file()) {
        Ok(file) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init()
                .is_ok();
            if installed {
                tracing::info!(path = %paths.log_file().display(), "logging initialized");
                Some(paths.log_file())
            } else {
                None
            }
        }
        Err(_) => {
            let _ = tracing_subscriber::registry().with(filter).try_init();
            None
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("tracker.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on a bogus directive
        let _ = build_filter("not a [valid filter");
    }
}

//! Tracing subscriber setup
//!
//! CLI commands log to stderr; the TUI logs to a file under the base
//! directory so log lines never land on the alternate screen.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use super::paths::TrackerPaths;

static TRACING_INIT: Once = Once::new();

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, warnings and above unless `RUST_LOG` says otherwise
    Stderr,
    /// The tracker log file, info and above
    File,
}

fn filter_for(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", default_level)))
}

/// Initializes the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(paths: &TrackerPaths, target: LogTarget) {
    TRACING_INIT.call_once(|| match target {
        LogTarget::Stderr => {
            let _ = fmt()
                .with_env_filter(filter_for("warn"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let file = paths.ensure_directories().ok().and_then(|_| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(paths.log_file())
                    .ok()
            });

            // Without a writable log file the TUI runs silent.
            if let Some(file) = file {
                let _ = fmt()
                    .with_env_filter(filter_for("info"))
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
        }
    });

    tracing::debug!(base_dir = %paths.base_dir().display(), "tracing initialized");
}

//! Logging setup and crash reporting.
//!
//! Library code logs through `tracing` (and `log` in the config loader, which
//! the subscriber bridges). The filter comes from `TOWNMAP_LOG`, then
//! `RUST_LOG`, then defaults to `warn`.
//!
//! While the map owns the terminal nothing may be written to stderr, so the
//! explorer logs to a file or nowhere.

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "TOWNMAP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Logging for a command that does or does not take over the terminal.
    pub fn for_command(uses_terminal: bool, log_file: Option<&Path>) -> Self {
        match (log_file, uses_terminal) {
            (Some(path), _) => LogTarget::File(path.to_path_buf()),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logging(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}

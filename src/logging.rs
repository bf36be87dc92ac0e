//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a file
//! under the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::CarteiraError;

static TRACING_INIT: Once = Once::new();

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "CARTEIRA_LOG";

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: `CARTEIRA_LOG` wins, otherwise the configured directive
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber once. Later calls are ignored.
pub fn init(target: LogTarget<'_>, default_directive: &str) -> Result<(), CarteiraError> {
    let mut result = Ok(());

    TRACING_INIT.call_once(|| {
        let filter = build_filter(default_directive);
        result = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| CarteiraError::Config(format!("Failed to initialize logging: {}", e))),
            LogTarget::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CarteiraError::Io(format!("Failed to open log file: {}", e)))
                .and_then(|file| {
                    fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init()
                        .map_err(|e| {
                            CarteiraError::Config(format!("Failed to initialize logging: {}", e))
                        })
                }),
        };
    });

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_falls_back() {
        // Must not panic on garbage input
        let _filter = build_filter("carteira=[[[");
    }

    #[test]
    fn test_init_is_idempotent() {
        assert!(init(LogTarget::Stderr, "carteira=warn").is_ok());
        assert!(init(LogTarget::Stderr, "carteira=warn").is_ok());
    }
}

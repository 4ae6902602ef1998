//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Verbosity of the JSON log stream on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// No log output; only user-facing lines reach the terminal.
    Quiet,
    Info,
    /// Includes raw event payloads, the resolved configuration and the
    /// outbound request. Credentials are redacted.
    Debug,
}

impl LogLevel {
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "off",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Install the global JSON subscriber.
///
/// `RUST_LOG` overrides `level` when set. Calling this more than once is a
/// no-op.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(false)
        .try_init();
}

//! Application configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use super::args::CliArgs;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Process configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Settings file path.
    pub settings_path: PathBuf,
    /// Log file path.
    pub log_path: Option<PathBuf>,
    /// Log verbosity level.
    pub log_level: LogLevel,
    /// Listen address.
    pub bind: IpAddr,
    /// Open the local page once listening.
    pub open_browser: bool,
}

impl AppConfig {
    /// Builds configuration from parsed arguments.
    #[must_use]
    pub fn from_args(args: CliArgs) -> Self {
        Self {
            settings_path: args.config,
            log_path: args.log_path,
            log_level: args.log_level.unwrap_or_default(),
            bind: args.bind,
            open_browser: args.open,
        }
    }

    /// Directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_directive(&self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.log_level)
    }
}

//! Infrastructure layer with external service adapters.

/// Backend HTTP transport.
pub mod backend;
pub mod browser;
/// Process configuration and the settings file.
pub mod config;

pub use backend::ReqwestTransport;
pub use browser::SystemBrowser;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, SettingsFile};

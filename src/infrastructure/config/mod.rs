//! Process configuration and the settings file.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, LogLevel};
pub use args::CliArgs;
pub use storage::{ConfigError, DEFAULT_SETTINGS_FILE, SettingsFile};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::Settings;
use crate::domain::errors::RelayError;
use crate::domain::ports::SettingsStoragePort;

/// Settings file used when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for RelayError {
    fn from(e: ConfigError) -> Self {
        Self::persistence(e.to_string())
    }
}

/// JSON settings file with atomic writes.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Creates store for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// untouched and defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot
    /// be written.
    pub fn read(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Settings file not found, creating default");
            let defaults = Settings::default();
            self.write(&defaults)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!(path = %self.path.display(), "Settings loaded");
                Ok(settings)
            }
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to parse settings file, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Writes the settings as pretty JSON through a temp file in the same
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn write(&self, settings: &Settings) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(settings)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.write_all(b"\n")?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}

impl SettingsStoragePort for SettingsFile {
    fn load(&self) -> Result<Settings, RelayError> {
        self.read().map_err(RelayError::from)
    }

    fn save(&self, settings: &Settings) -> Result<(), RelayError> {
        self.write(settings).map_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to write settings file");
            RelayError::from(e)
        })
    }
}

//! Settings persistence port definition.

use crate::domain::entities::Settings;
use crate::domain::errors::RelayError;

/// Port for loading and saving the persisted settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStoragePort: Send + Sync {
    /// Loads the persisted settings, creating defaults if none exist yet.
    ///
    /// # Errors
    /// Returns [`RelayError::Persistence`] if storage cannot be read.
    fn load(&self) -> Result<Settings, RelayError>;

    /// Persists the given settings.
    ///
    /// # Errors
    /// Returns [`RelayError::Persistence`] if storage cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), RelayError>;
}

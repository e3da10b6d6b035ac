//! Settings load and update.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::context::RelayContext;
use crate::application::dto::SettingsUpdate;
use crate::domain::entities::Settings;
use crate::domain::errors::RelayError;
use crate::domain::ports::SettingsStoragePort;

pub const ENV_SERVER_URL: &str = "SERVER_URL";
pub const ENV_USER_API_KEY: &str = "USER_API_KEY";
pub const ENV_USER_ID: &str = "USER_ID";
pub const ENV_PORT: &str = "PORT";

/// Loads persisted settings and applies environment overrides.
pub struct LoadSettingsUseCase {
    storage: Arc<dyn SettingsStoragePort>,
}

impl LoadSettingsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage: Arc<dyn SettingsStoragePort>) -> Self {
        Self { storage }
    }

    /// Resolves the startup settings.
    ///
    /// Storage failures are not fatal: they are logged and defaults are used.
    /// `lookup` resolves environment variables; set, non-empty values win
    /// over persisted ones and numbers that do not parse are ignored.
    pub fn execute(&self, lookup: impl Fn(&str) -> Option<String>) -> Settings {
        let mut settings = self.storage.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load settings, using defaults");
            Settings::default()
        });

        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(ENV_SERVER_URL) {
            debug!(var = ENV_SERVER_URL, "Applying environment override");
            settings.server_url = url;
        }
        if let Some(key) = lookup(ENV_USER_API_KEY) {
            debug!(var = ENV_USER_API_KEY, "Applying environment override");
            settings.user_api_key = key;
        }
        if let Some(raw) = lookup(ENV_USER_ID) {
            match raw.trim().parse() {
                Ok(id) => settings.user_id = id,
                Err(_) => warn!(var = ENV_USER_ID, "Ignoring non-numeric override"),
            }
        }
        if let Some(raw) = lookup(ENV_PORT) {
            match raw.trim().parse() {
                Ok(port) => settings.port = port,
                Err(_) => warn!(var = ENV_PORT, "Ignoring invalid port override"),
            }
        }

        settings.normalized()
    }
}

/// Replaces the live settings and persists them.
#[derive(Clone)]
pub struct UpdateSettingsUseCase {
    context: Arc<RelayContext>,
    storage: Arc<dyn SettingsStoragePort>,
}

impl UpdateSettingsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(context: Arc<RelayContext>, storage: Arc<dyn SettingsStoragePort>) -> Self {
        Self { context, storage }
    }

    /// Applies the update.
    ///
    /// The cached bearer credential is always dropped. When persisting fails
    /// the new settings stay in effect for this process.
    ///
    /// # Errors
    /// - [`RelayError::Configuration`] if the update is malformed; nothing
    ///   changes in that case.
    /// - [`RelayError::Persistence`] if the settings could not be written.
    pub fn execute(&self, update: SettingsUpdate) -> Result<Settings, RelayError> {
        let current_port = self.context.settings().port;
        let settings = update.into_settings(current_port).map_err(|e| {
            warn!(error = %e, "Rejected settings update");
            e
        })?;

        let generation = self.context.replace_settings(settings.clone());
        info!(
            generation,
            server_url = %settings.server_url,
            user_id = settings.user_id,
            "Settings updated"
        );

        self.storage.save(&settings).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist settings");
            e
        })?;

        Ok(settings)
    }
}

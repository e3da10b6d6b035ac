//! Settings update DTOs.

use serde::Deserialize;

use crate::domain::entities::Settings;
use crate::domain::errors::RelayError;

/// Numeric setting as submitted by a form (text) or a JSON client (number).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    /// Numeric JSON value.
    Number(u64),
    /// Text value, possibly empty.
    Text(String),
}

impl NumericField {
    /// Parses the value. Empty text yields `None`.
    ///
    /// # Errors
    /// Returns [`RelayError::Configuration`] if the text is not an unsigned
    /// integer.
    pub fn parse(&self, name: &str) -> Result<Option<u64>, RelayError> {
        match self {
            Self::Number(value) => Ok(Some(*value)),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse().map(Some).map_err(|_| {
                    RelayError::configuration(format!("{name} must be a number, got {text:?}"))
                })
            }
        }
    }
}

impl Default for NumericField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<u64> for NumericField {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Inbound settings update.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    /// Backend base URL.
    pub server_url: String,
    /// Static API key.
    pub user_api_key: String,
    /// Account identifier; empty means unset.
    pub user_id: NumericField,
    /// Local listen port; the current one is kept when absent or empty.
    pub port: Option<NumericField>,
}

impl SettingsUpdate {
    /// Validates the update and builds the replacement settings.
    ///
    /// # Errors
    /// Returns [`RelayError::Configuration`] if the account identifier or the
    /// port is malformed.
    pub fn into_settings(self, current_port: u16) -> Result<Settings, RelayError> {
        let user_id = self.user_id.parse("user ID")?.unwrap_or(0);

        let port = match &self.port {
            Some(field) => match field.parse("port")? {
                Some(value) => u16::try_from(value)
                    .map_err(|_| RelayError::configuration(format!("port {value} is out of range")))?,
                None => current_port,
            },
            None => current_port,
        };

        Ok(Settings {
            server_url: self.server_url,
            user_api_key: self.user_api_key,
            user_id,
            port,
        }
        .normalized())
    }
}

impl std::fmt::Debug for SettingsUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsUpdate")
            .field("server_url", &self.server_url)
            .field("has_api_key", &!self.user_api_key.is_empty())
            .field("user_id", &self.user_id)
            .field("port", &self.port)
            .finish()
    }
}

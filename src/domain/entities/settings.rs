//! Relay settings entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listen port used when none is configured.
pub const DEFAULT_PORT: u16 = 8183;

/// Backend location and static credentials for the relay.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL, without trailing slash.
    pub server_url: String,
    /// Personal API key issued by the backend.
    pub user_api_key: String,
    /// Account identifier paired with the API key. Zero means unset.
    pub user_id: u64,
    /// Local listen port.
    pub port: u16,
}

impl Settings {
    /// Applies the settings invariants: no trailing slash on the URL and a
    /// non-zero port.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.server_url = self.server_url.trim().trim_end_matches('/').to_string();
        self.user_api_key = self.user_api_key.trim().to_string();
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        self
    }

    /// Returns whether a backend URL is set.
    #[must_use]
    pub fn has_server_url(&self) -> bool {
        !self.server_url.is_empty()
    }

    /// Returns whether everything the static-key mode needs is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.has_server_url() && !self.user_api_key.is_empty() && self.user_id != 0
    }

    /// Joins a backend path onto the base URL.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.server_url)
        } else {
            format!("{}/{path}", self.server_url)
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            user_api_key: String::new(),
            user_id: 0,
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.user_api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("Settings")
            .field("server_url", &self.server_url)
            .field("user_api_key", &api_key)
            .field("user_id", &self.user_id)
            .field("port", &self.port)
            .finish()
    }
}

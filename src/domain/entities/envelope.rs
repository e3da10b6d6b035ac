//! Backend response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::RelayError;

/// Uniform response wrapper returned by every backend endpoint.
///
/// `data` is kept opaque; callers decode it into the shape they expect with
/// [`Envelope::decode_data`]. When `success` is false the payload carries no
/// guaranteed content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Human-readable message, usually present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Parses an envelope from a raw response body.
    ///
    /// # Errors
    /// Returns [`RelayError::Decode`] carrying the raw body when it is not a
    /// JSON envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(body)
            .map_err(|e| RelayError::decode(e.to_string(), String::from_utf8_lossy(body)))
    }

    /// Decodes the payload into a concrete shape.
    ///
    /// # Errors
    /// Returns [`RelayError::Decode`] when the payload is absent or does not
    /// match `T`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, RelayError> {
        let Some(data) = &self.data else {
            return Err(RelayError::decode("response carried no data", ""));
        };

        T::deserialize(data).map_err(|e| RelayError::decode(e.to_string(), data.to_string()))
    }

    /// Returns the backend message, or an empty string.
    #[must_use]
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

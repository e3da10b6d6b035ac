//! Relay error types.

use thiserror::Error;

/// Underlying cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Relay error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RelayError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("failed to decode response: {message}, body: {body}")]
    Decode { message: String, body: String },

    #[error("backend reported failure: {message}")]
    Api { message: String },

    #[error("failed to persist settings: {message}")]
    Persistence { message: String },
}

impl RelayError {
    /// Creates configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates transport error without an underlying cause.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates transport error wrapping its cause.
    #[must_use]
    pub fn transport_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates decode error with the offending body.
    #[must_use]
    pub fn decode(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Creates backend failure error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Creates persistence error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Returns whether a manual retry may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns whether the backend itself rejected the request.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = RelayError::transport_with_source("failed to connect to backend", cause);

        assert!(err.is_retryable());
        assert_eq!(err.source().unwrap().to_string(), "refused");
    }

    #[test]
    fn test_only_transport_is_retryable() {
        assert!(!RelayError::configuration("x").is_retryable());
        assert!(!RelayError::api("x").is_retryable());
        assert!(!RelayError::decode("x", "y").is_retryable());
        assert!(!RelayError::persistence("x").is_retryable());
    }

    #[test]
    fn test_display_includes_raw_body() {
        let err = RelayError::decode("expected value at line 1 column 1", "oops");
        assert_eq!(
            err.to_string(),
            "failed to decode response: expected value at line 1 column 1, body: oops"
        );
    }
}

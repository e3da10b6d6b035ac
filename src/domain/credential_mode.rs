//! Credential mode definitions.

use std::fmt;

/// Authentication scheme attached to an outbound relay call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialMode {
    /// No credential headers.
    None,
    /// Static API key plus account identifier headers.
    StaticKey,
    /// Cached bearer token in the `Authorization` header.
    BearerToken,
}

impl CredentialMode {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StaticKey => "static-key",
            Self::BearerToken => "bearer-token",
        }
    }
}

impl fmt::Display for CredentialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

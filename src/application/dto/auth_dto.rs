//! Session bootstrap DTOs.

use crate::application::endpoints;
use crate::domain::entities::Envelope;

/// Public flow that may establish a bearer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    /// Username and password login.
    Login,
    /// Account registration.
    Register,
}

impl SessionFlow {
    /// Returns the backend path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => endpoints::AUTH_LOGIN,
            Self::Register => endpoints::AUTH_REGISTER,
        }
    }

    /// Returns human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "registration",
        }
    }
}

impl std::fmt::Display for SessionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of a login or registration attempt.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Backend envelope, returned for display.
    pub envelope: Envelope,
    /// Whether a session was cached.
    pub established: bool,
}

//! Shared relay state: settings and the single credential slot.

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::{BearerToken, Settings};

/// Point-in-time copy of the relay state taken before an outbound call.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Settings in effect.
    pub settings: Settings,
    /// Cached bearer credential, if any.
    pub bearer: Option<BearerToken>,
    /// Settings generation the snapshot was taken under.
    pub generation: u64,
}

#[derive(Debug)]
struct SessionState {
    settings: Settings,
    bearer: Option<BearerToken>,
    generation: u64,
}

/// Settings plus credential cache behind one lock.
///
/// The lock is only held for copies and swaps, never across an outbound
/// call. Every settings replacement bumps the generation so that bootstrap
/// results started under older settings can be discarded.
#[derive(Debug)]
pub struct RelayContext {
    state: RwLock<SessionState>,
}

impl RelayContext {
    /// Creates context with no cached credential.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            state: RwLock::new(SessionState {
                settings: settings.normalized(),
                bearer: None,
                generation: 0,
            }),
        }
    }

    /// Copies the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read();
        SessionSnapshot {
            settings: state.settings.clone(),
            bearer: state.bearer.clone(),
            generation: state.generation,
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.state.read().settings.clone()
    }

    /// Returns the cached bearer credential.
    #[must_use]
    pub fn bearer_token(&self) -> Option<BearerToken> {
        self.state.read().bearer.clone()
    }

    /// Returns whether a bearer credential is cached.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.state.read().bearer.is_some()
    }

    /// Returns the current settings generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Replaces the settings wholesale and drops the cached credential.
    ///
    /// Returns the new generation.
    pub fn replace_settings(&self, settings: Settings) -> u64 {
        let mut state = self.state.write();
        state.settings = settings.normalized();
        state.bearer = None;
        state.generation = state.generation.wrapping_add(1);
        debug!(generation = state.generation, "Settings replaced, credential cleared");
        state.generation
    }

    /// Caches a bearer credential if `generation` is still current.
    ///
    /// Returns whether the token was stored.
    pub fn store_token(&self, token: BearerToken, generation: u64) -> bool {
        let mut state = self.state.write();
        if state.generation != generation {
            return false;
        }
        state.bearer = Some(token);
        true
    }

    /// Caches a bearer credential and records the account it belongs to, if
    /// `generation` is still current. A zero `user_id` leaves the configured
    /// account identifier untouched.
    ///
    /// Returns whether the session was stored.
    pub fn establish_session(&self, token: BearerToken, user_id: u64, generation: u64) -> bool {
        let mut state = self.state.write();
        if state.generation != generation {
            return false;
        }
        state.bearer = Some(token);
        if user_id != 0 {
            state.settings.user_id = user_id;
        }
        true
    }
}

impl Default for RelayContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

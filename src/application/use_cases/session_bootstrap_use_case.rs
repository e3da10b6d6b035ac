//! Login and registration flows.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::application::dto::{SessionFlow, SessionOutcome};
use crate::application::services::relay_client::{EnvelopePolicy, RelayClient, RelayRequest};
use crate::domain::CredentialMode;
use crate::domain::entities::{BearerToken, SessionGrant};
use crate::domain::errors::RelayError;

/// Relays a login or registration and caches the resulting session.
#[derive(Clone)]
pub struct SessionBootstrapUseCase {
    relay: Arc<RelayClient>,
}

impl SessionBootstrapUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(relay: Arc<RelayClient>) -> Self {
        Self { relay }
    }

    /// Runs the flow with the caller supplied credentials.
    ///
    /// A failure envelope is not an error: it is returned for display and no
    /// state changes. The same holds when the payload is not a session grant.
    ///
    /// # Errors
    /// Returns error on configuration, transport or envelope decode failure.
    pub async fn execute(
        &self,
        flow: SessionFlow,
        credentials: Map<String, Value>,
    ) -> Result<SessionOutcome, RelayError> {
        debug!(flow = %flow, "Relaying session bootstrap");

        let relayed = self
            .relay
            .relay(
                RelayRequest::post(flow.path()).with_json(Value::Object(credentials)),
                CredentialMode::None,
                EnvelopePolicy::Lenient,
            )
            .await?;

        let envelope = relayed.envelope;
        if !envelope.success {
            debug!(flow = %flow, message = envelope.message_text(), "Backend rejected credentials");
            return Ok(SessionOutcome {
                envelope,
                established: false,
            });
        }

        let grant = match envelope.decode_data::<SessionGrant>() {
            Ok(grant) => grant,
            Err(e) => {
                warn!(flow = %flow, error = %e, "Successful response is not a session grant");
                return Ok(SessionOutcome {
                    envelope,
                    established: false,
                });
            }
        };

        let user_id = grant.user.id;
        let Some(token) = BearerToken::new(grant.token) else {
            warn!(flow = %flow, "Successful response carried no session token");
            return Ok(SessionOutcome {
                envelope,
                established: false,
            });
        };

        let established = self
            .relay
            .context()
            .establish_session(token, user_id, relayed.generation);

        if established {
            info!(flow = %flow, user_id, "Session established");
        } else {
            warn!(flow = %flow, "Settings changed during bootstrap, discarding session");
        }

        Ok(SessionOutcome {
            envelope,
            established,
        })
    }
}

//! Authenticated API relay.
//!
//! A relay call resolves credentials from a [`SessionSnapshot`] before any
//! network traffic, sends the request through the [`TransportPort`] and
//! unwraps the backend [`Envelope`]. Authenticated calls turn
//! `success = false` into [`RelayError::Api`]; the public relay hands the
//! envelope back untouched.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::context::{RelayContext, SessionSnapshot};
use crate::domain::CredentialMode;
use crate::domain::entities::Envelope;
use crate::domain::errors::RelayError;
use crate::domain::ports::{HttpMethod, OutboundRequest, TransportPort};

/// Upper bound for a single backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const HEADER_API_KEY: &str = "X-User-API-Key";
pub const HEADER_USER_ID: &str = "X-User-ID";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
const HEADER_ACCEPT: &str = "Accept";
const HEADER_CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// Method, backend path and optional JSON body of a relay call.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
}

impl RelayRequest {
    /// Creates request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Attaches a JSON body. `null` is treated as no body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = (!body.is_null()).then_some(body);
        self
    }

    /// Attaches a typed body.
    ///
    /// # Errors
    /// Returns [`RelayError::Configuration`] if the payload cannot be
    /// represented as JSON.
    pub fn with_payload<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self, RelayError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| RelayError::configuration(format!("invalid request body: {e}")))?;
        Ok(self.with_json(body))
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// How a parsed envelope with `success = false` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnvelopePolicy {
    Strict,
    Lenient,
}

/// Envelope plus the settings generation the call was made under.
#[derive(Debug, Clone)]
pub(crate) struct Relayed {
    pub envelope: Envelope,
    pub generation: u64,
}

/// Relay client shared by every inbound route.
#[derive(Clone)]
pub struct RelayClient {
    transport: Arc<dyn TransportPort>,
    context: Arc<RelayContext>,
    timeout: Duration,
}

impl RelayClient {
    /// Creates client with the default timeout.
    #[must_use]
    pub fn new(transport: Arc<dyn TransportPort>, context: Arc<RelayContext>) -> Self {
        Self {
            transport,
            context,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the shared relay state.
    #[must_use]
    pub const fn context(&self) -> &Arc<RelayContext> {
        &self.context
    }

    /// Issues an authenticated relay call.
    ///
    /// # Errors
    /// - [`RelayError::Configuration`] if a required setting or the session
    ///   credential is missing; no request is sent in that case.
    /// - [`RelayError::Transport`] on network failure.
    /// - [`RelayError::Decode`] if the body is not an envelope.
    /// - [`RelayError::Api`] if the backend reports `success = false`.
    pub async fn call(
        &self,
        request: RelayRequest,
        mode: CredentialMode,
    ) -> Result<Envelope, RelayError> {
        self.relay(request, mode, EnvelopePolicy::Strict)
            .await
            .map(|relayed| relayed.envelope)
    }

    /// Issues a call without credentials and returns the envelope as-is,
    /// including backend-reported failures.
    ///
    /// # Errors
    /// Same as [`RelayClient::call`], except that `success = false` is not an
    /// error.
    pub async fn call_public(&self, request: RelayRequest) -> Result<Envelope, RelayError> {
        self.relay(request, CredentialMode::None, EnvelopePolicy::Lenient)
            .await
            .map(|relayed| relayed.envelope)
    }

    /// Issues an authenticated call and decodes its payload.
    ///
    /// # Errors
    /// Same as [`RelayClient::call`], plus [`RelayError::Decode`] if the
    /// payload does not match `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: RelayRequest,
        mode: CredentialMode,
    ) -> Result<T, RelayError> {
        self.call(request, mode).await?.decode_data()
    }

    pub(crate) async fn relay(
        &self,
        request: RelayRequest,
        mode: CredentialMode,
        policy: EnvelopePolicy,
    ) -> Result<Relayed, RelayError> {
        let snapshot = self.context.snapshot();
        let outbound = self.build_outbound(&request, mode, &snapshot)?;

        debug!(
            method = %request.method,
            path = %request.path,
            mode = %mode,
            "Relaying request"
        );

        let response = self.transport.send(outbound).await.map_err(|e| {
            warn!(error = %e, path = %request.path, "Backend call failed");
            e
        })?;

        let envelope = Envelope::from_slice(&response.body).map_err(|e| {
            warn!(status = response.status, path = %request.path, "Backend returned a non-envelope body");
            e
        })?;

        debug!(
            status = response.status,
            success = envelope.success,
            "Backend responded"
        );

        if policy == EnvelopePolicy::Strict && !envelope.success {
            return Err(RelayError::api(envelope.message.unwrap_or_default()));
        }

        Ok(Relayed {
            envelope,
            generation: snapshot.generation,
        })
    }

    fn build_outbound(
        &self,
        request: &RelayRequest,
        mode: CredentialMode,
        snapshot: &SessionSnapshot,
    ) -> Result<OutboundRequest, RelayError> {
        let mut headers = credential_headers(mode, snapshot)?;
        headers.push((HEADER_ACCEPT, JSON_MIME.to_string()));

        let body = match &request.body {
            Some(value) => {
                headers.push((HEADER_CONTENT_TYPE, JSON_MIME.to_string()));
                Some(serde_json::to_vec(value).map_err(|e| {
                    RelayError::configuration(format!("invalid request body: {e}"))
                })?)
            }
            None => None,
        };

        Ok(OutboundRequest {
            method: request.method,
            url: snapshot.settings.endpoint_url(&request.path),
            headers,
            body,
            timeout: self.timeout,
        })
    }
}

fn credential_headers(
    mode: CredentialMode,
    snapshot: &SessionSnapshot,
) -> Result<Vec<(&'static str, String)>, RelayError> {
    let settings = &snapshot.settings;

    if !settings.has_server_url() {
        return Err(RelayError::configuration("server URL is not configured"));
    }

    match mode {
        CredentialMode::None => Ok(Vec::new()),
        CredentialMode::StaticKey => {
            if settings.user_api_key.is_empty() {
                return Err(RelayError::configuration("API key is not configured"));
            }
            if settings.user_id == 0 {
                return Err(RelayError::configuration("user ID is not configured"));
            }
            Ok(vec![
                (HEADER_API_KEY, settings.user_api_key.clone()),
                (HEADER_USER_ID, settings.user_id.to_string()),
            ])
        }
        CredentialMode::BearerToken => {
            let token = snapshot
                .bearer
                .as_ref()
                .ok_or_else(|| RelayError::configuration("no active session"))?;
            Ok(vec![(HEADER_AUTHORIZATION, token.authorization())])
        }
    }
}

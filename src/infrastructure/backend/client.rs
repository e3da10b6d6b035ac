//! Backend HTTP transport.

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::application::services::REQUEST_TIMEOUT;
use crate::domain::errors::RelayError;
use crate::domain::ports::{HttpMethod, OutboundRequest, RawResponse, TransportPort};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `reqwest` backed transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates transport with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, RelayError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                RelayError::configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

const fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

fn transport_error(e: reqwest::Error) -> RelayError {
    let message = if e.is_timeout() {
        "request timed out"
    } else if e.is_connect() {
        "failed to connect to backend"
    } else if e.is_builder() {
        "invalid backend URL"
    } else {
        "request failed"
    };
    RelayError::transport_with_source(message, e)
}

#[async_trait]
impl TransportPort for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, RelayError> {
        let mut builder = self
            .client
            .request(method_of(request.method), &request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, url = %request.url, "Failed to reach backend");
            transport_error(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read backend response");
            transport_error(e)
        })?;

        debug!(status, bytes = body.len(), "Received backend response");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

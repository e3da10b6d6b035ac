//! Outbound HTTP transport port definition.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::RelayError;

/// HTTP methods used against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Returns the method token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved outbound request: credentials are already attached.
#[derive(Clone)]
pub struct OutboundRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Absolute backend URL.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
    /// Upper bound for the whole call.
    pub timeout: Duration,
}

impl OutboundRequest {
    /// Looks up a header value, ignoring name case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(name, _)| *name).collect();
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &header_names)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Raw backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

/// Port for issuing outbound HTTP calls.
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// Only network-level failures are errors; any status code with a body
    /// is a response.
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, RelayError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Scripted transport that records every request it receives.
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<RawResponse, RelayError>>>,
        requests: Mutex<Vec<OutboundRequest>>,
    }

    impl MockTransport {
        /// Creates mock with no scripted responses.
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Creates mock answering once with the given JSON body.
        pub fn with_json(body: &str) -> Self {
            let transport = Self::new();
            transport.push_json(body);
            transport
        }

        /// Queues a 200 response with the given body.
        pub fn push_json(&self, body: &str) {
            self.push_raw(200, body.as_bytes());
        }

        /// Queues a response with arbitrary status and body.
        pub fn push_raw(&self, status: u16, body: &[u8]) {
            self.responses.lock().push_back(Ok(RawResponse {
                status,
                body: body.to_vec(),
            }));
        }

        /// Queues a transport failure.
        pub fn push_failure(&self, message: &str) {
            self.responses
                .lock()
                .push_back(Err(RelayError::transport(message)));
        }

        /// Number of requests sent so far.
        pub fn calls(&self) -> usize {
            self.requests.lock().len()
        }

        /// Returns every request sent so far.
        pub fn requests(&self) -> Vec<OutboundRequest> {
            self.requests.lock().clone()
        }

        /// Returns the most recent request.
        pub fn last_request(&self) -> Option<OutboundRequest> {
            self.requests.lock().last().cloned()
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TransportPort for MockTransport {
        async fn send(&self, request: OutboundRequest) -> Result<RawResponse, RelayError> {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(RelayError::transport("no scripted response")))
        }
    }
}

//! Static-key to bearer token exchange.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::endpoints;
use crate::application::services::relay_client::{EnvelopePolicy, RelayClient, RelayRequest};
use crate::domain::CredentialMode;
use crate::domain::entities::{BearerToken, TokenGrant};
use crate::domain::errors::RelayError;

/// Exchanges the configured API key for a bearer token and caches it.
#[derive(Clone)]
pub struct ExchangeTokenUseCase {
    relay: Arc<RelayClient>,
}

impl ExchangeTokenUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(relay: Arc<RelayClient>) -> Self {
        Self { relay }
    }

    /// Runs the exchange.
    ///
    /// The grant is returned even when a settings update landed while the
    /// call was in flight; in that case the token is not cached.
    ///
    /// # Errors
    /// Returns any relay error, or [`RelayError::Decode`] if the grant carries
    /// an empty access token.
    pub async fn execute(&self) -> Result<TokenGrant, RelayError> {
        debug!("Exchanging API key for bearer token");

        let relayed = self
            .relay
            .relay(
                RelayRequest::post(endpoints::USER_API_TOKEN),
                CredentialMode::StaticKey,
                EnvelopePolicy::Strict,
            )
            .await?;

        let grant: TokenGrant = relayed.envelope.decode_data()?;
        let token = BearerToken::new(&grant.access_token).ok_or_else(|| {
            warn!("Token grant carried no access token");
            RelayError::decode("token grant carried an empty access token", "")
        })?;

        if self
            .relay
            .context()
            .store_token(token, relayed.generation)
        {
            info!(
                user_id = grant.user_id,
                expires_in = grant.expires_in,
                "Bearer token cached"
            );
        } else {
            warn!("Settings changed during token exchange, discarding token");
        }

        Ok(grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::RelayContext;
    use crate::domain::entities::Settings;
    use crate::domain::ports::mocks::MockTransport;
    use crate::domain::ports::{OutboundRequest, RawResponse, TransportPort};
    use async_trait::async_trait;

    fn configured() -> Settings {
        Settings {
            server_url: "https://backend.example".to_string(),
            user_api_key: "key".to_string(),
            user_id: 42,
            ..Settings::default()
        }
    }

    fn client(transport: Arc<dyn TransportPort>, context: Arc<RelayContext>) -> Arc<RelayClient> {
        Arc::new(RelayClient::new(transport, context))
    }

    #[tokio::test]
    async fn test_exchange_caches_token_for_bearer_calls() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"access_token":"abc123","token_type":"Bearer","expires_in":3600,"user_id":42}}"#,
        ));
        transport.push_json(r#"{"success":true,"data":{}}"#);
        let context = Arc::new(RelayContext::new(configured()));
        let relay = client(transport.clone(), context.clone());

        let grant = ExchangeTokenUseCase::new(relay.clone()).execute().await.unwrap();
        relay
            .call(RelayRequest::get(endpoints::AUTH_PROFILE), CredentialMode::BearerToken)
            .await
            .unwrap();

        assert_eq!(grant.expires_in, 3600);
        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://backend.example/api/user-api/token");
        assert_eq!(requests[0].header("X-User-API-Key"), Some("key"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer abc123"));
    }

    #[tokio::test]
    async fn test_empty_access_token_is_decode_error() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"access_token":""}}"#,
        ));
        let context = Arc::new(RelayContext::new(configured()));

        let result = ExchangeTokenUseCase::new(client(transport, context.clone()))
            .execute()
            .await;

        assert!(matches!(result, Err(RelayError::Decode { .. })));
        assert!(!context.has_token());
    }

    #[tokio::test]
    async fn test_backend_refusal_leaves_cache_empty() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":false,"message":"invalid api key"}"#,
        ));
        let context = Arc::new(RelayContext::new(configured()));

        let err = ExchangeTokenUseCase::new(client(transport, context.clone()))
            .execute()
            .await
            .unwrap_err();

        assert!(err.is_api_error());
        assert!(!context.has_token());
    }

    #[tokio::test]
    async fn test_missing_configuration_makes_no_call() {
        let transport = Arc::new(MockTransport::new());
        let context = Arc::new(RelayContext::new(Settings {
            user_api_key: String::new(),
            ..configured()
        }));

        let result = ExchangeTokenUseCase::new(client(transport.clone(), context))
            .execute()
            .await;

        assert!(matches!(result, Err(RelayError::Configuration { .. })));
        assert_eq!(transport.calls(), 0);
    }

    /// Replaces the settings while the exchange is in flight.
    struct RacingTransport {
        context: Arc<RelayContext>,
    }

    #[async_trait]
    impl TransportPort for RacingTransport {
        async fn send(&self, _request: OutboundRequest) -> Result<RawResponse, RelayError> {
            self.context.replace_settings(Settings {
                user_api_key: "rotated".to_string(),
                ..configured()
            });
            Ok(RawResponse {
                status: 200,
                body: br#"{"success":true,"data":{"access_token":"late"}}"#.to_vec(),
            })
        }
    }

    #[tokio::test]
    async fn test_settings_update_during_exchange_wins() {
        let context = Arc::new(RelayContext::new(configured()));
        let transport = Arc::new(RacingTransport {
            context: context.clone(),
        });

        let grant = ExchangeTokenUseCase::new(client(transport, context.clone()))
            .execute()
            .await
            .unwrap();

        assert_eq!(grant.access_token, "late");
        assert!(!context.has_token());
        assert_eq!(context.settings().user_api_key, "rotated");
    }
}

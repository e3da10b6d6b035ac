//! Typed wrappers over the relayed backend endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::dto::PaymentRequest;
use crate::application::endpoints::{self, Pagination};
use crate::application::services::relay_client::{RelayClient, RelayRequest};
use crate::domain::CredentialMode;
use crate::domain::entities::{
    Balance, BalanceLogPage, Envelope, MessagePage, Profile, UnreadCount,
};
use crate::domain::errors::RelayError;

/// Account endpoints grouped by credential mode.
#[derive(Clone)]
pub struct AccountService {
    relay: Arc<RelayClient>,
}

impl AccountService {
    /// Creates service over a shared relay client.
    #[must_use]
    pub const fn new(relay: Arc<RelayClient>) -> Self {
        Self { relay }
    }

    async fn opaque(&self, request: RelayRequest) -> Result<Value, RelayError> {
        let envelope = self.relay.call(request, CredentialMode::BearerToken).await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    /// Fetches the profile with the static API key.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload is not a profile.
    pub async fn api_key_profile(&self) -> Result<Profile, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(endpoints::USER_API_PROFILE),
                CredentialMode::StaticKey,
            )
            .await
    }

    /// Fetches the balance with the static API key.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload is not a balance.
    pub async fn api_key_balance(&self) -> Result<Balance, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(endpoints::USER_API_BALANCE),
                CredentialMode::StaticKey,
            )
            .await
    }

    /// Fetches the profile with the cached session.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload is not a profile.
    pub async fn session_profile(&self) -> Result<Profile, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(endpoints::AUTH_PROFILE),
                CredentialMode::BearerToken,
            )
            .await
    }

    /// Fetches one page of inbox messages.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload does not match.
    pub async fn messages(&self, pagination: Pagination) -> Result<MessagePage, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(pagination.apply(endpoints::MESSAGES)),
                CredentialMode::BearerToken,
            )
            .await
    }

    /// Fetches the unread message count.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload does not match.
    pub async fn unread_count(&self) -> Result<UnreadCount, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(endpoints::MESSAGES_UNREAD_COUNT),
                CredentialMode::BearerToken,
            )
            .await
    }

    /// Fetches one page of balance change records.
    ///
    /// # Errors
    /// Returns error if the relay call fails or the payload does not match.
    pub async fn balance_logs(&self, pagination: Pagination) -> Result<BalanceLogPage, RelayError> {
        self.relay
            .fetch(
                RelayRequest::get(pagination.apply(endpoints::AUTH_BALANCE_LOGS)),
                CredentialMode::BearerToken,
            )
            .await
    }

    /// Fetches the session balance payload as-is.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn session_balance(&self) -> Result<Value, RelayError> {
        self.opaque(RelayRequest::get(endpoints::AUTH_BALANCE)).await
    }

    /// Fetches linked third-party account status.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn third_party_status(&self) -> Result<Value, RelayError> {
        self.opaque(RelayRequest::get(endpoints::AUTH_THIRD_PARTY_STATUS))
            .await
    }

    /// Fetches one page of payment orders.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn payment_orders(&self, pagination: Pagination) -> Result<Value, RelayError> {
        self.opaque(RelayRequest::get(
            pagination.apply(endpoints::AUTH_PAYMENT_ORDERS),
        ))
        .await
    }

    /// Updates profile fields.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn update_profile(
        &self,
        fields: &BTreeMap<String, String>,
    ) -> Result<Envelope, RelayError> {
        let request = RelayRequest::put(endpoints::AUTH_PROFILE).with_payload(fields)?;
        self.relay.call(request, CredentialMode::BearerToken).await
    }

    /// Marks every inbox message as read.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn read_all_messages(&self) -> Result<Envelope, RelayError> {
        self.relay
            .call(
                RelayRequest::post(endpoints::MESSAGES_READ_ALL),
                CredentialMode::BearerToken,
            )
            .await
    }

    /// Creates a payment order.
    ///
    /// # Errors
    /// Returns error if the relay call fails.
    pub async fn create_payment(&self, payment: &PaymentRequest) -> Result<Envelope, RelayError> {
        let request = RelayRequest::post(endpoints::PAYMENT_CREATE).with_payload(payment)?;
        self.relay.call(request, CredentialMode::BearerToken).await
    }

    /// Fetches captcha availability.
    ///
    /// # Errors
    /// Returns error on configuration, transport or decode failure.
    pub async fn captcha_status(&self) -> Result<Envelope, RelayError> {
        self.relay
            .call_public(RelayRequest::get(endpoints::CAPTCHA_STATUS))
            .await
    }

    /// Requests a new captcha challenge.
    ///
    /// # Errors
    /// Returns error on configuration, transport or decode failure.
    pub async fn captcha_generate(&self) -> Result<Envelope, RelayError> {
        self.relay
            .call_public(RelayRequest::post(endpoints::CAPTCHA_GENERATE))
            .await
    }

    /// Verifies a captcha answer.
    ///
    /// # Errors
    /// Returns error on configuration, transport or decode failure.
    pub async fn captcha_verify(&self, answer: Map<String, Value>) -> Result<Envelope, RelayError> {
        self.relay
            .call_public(RelayRequest::post(endpoints::CAPTCHA_VERIFY).with_json(Value::Object(answer)))
            .await
    }

    /// Fetches the VIP level catalogue.
    ///
    /// # Errors
    /// Returns error on configuration, transport or decode failure.
    pub async fn vip_levels(&self) -> Result<Envelope, RelayError> {
        self.relay
            .call_public(RelayRequest::get(endpoints::VIP_LEVELS))
            .await
    }

    /// Fetches recharge options.
    ///
    /// # Errors
    /// Returns error on configuration, transport or decode failure.
    pub async fn recharge_settings(&self) -> Result<Envelope, RelayError> {
        self.relay
            .call_public(RelayRequest::get(endpoints::RECHARGE_SETTINGS))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::RelayContext;
    use crate::application::dto::ProductType;
    use crate::domain::entities::{BearerToken, Settings};
    use crate::domain::ports::HttpMethod;
    use crate::domain::ports::mocks::MockTransport;
    use serde_json::json;

    fn service(transport: &Arc<MockTransport>) -> AccountService {
        let context = Arc::new(RelayContext::new(Settings {
            server_url: "https://backend.example".to_string(),
            user_api_key: "key".to_string(),
            user_id: 42,
            ..Settings::default()
        }));
        context.store_token(BearerToken::new("tok").unwrap(), 0);
        AccountService::new(Arc::new(RelayClient::new(transport.clone(), context)))
    }

    #[tokio::test]
    async fn test_api_key_profile_decodes() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"id":42,"username":"demo","created_at":"2025-01-01T00:00:00Z"}}"#,
        ));

        let profile = service(&transport).api_key_profile().await.unwrap();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.username, "demo");
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://backend.example/api/user-api/profile");
        assert_eq!(request.header("X-User-ID"), Some("42"));
    }

    #[tokio::test]
    async fn test_session_profile_without_avatar() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"id":1,"username":"demo","avatar":null,"display_name":null}}"#,
        ));

        let profile = service(&transport).session_profile().await.unwrap();

        assert_eq!(profile.id, 1);
        assert!(profile.avatar.is_empty());
        assert!(profile.display_name.is_empty());
    }

    #[tokio::test]
    async fn test_messages_use_pagination() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"messages":[],"total":0,"page":2,"page_size":5}}"#,
        ));

        let page = service(&transport)
            .messages(Pagination::new(Some(2), Some(5)))
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://backend.example/api/messages?page=2&page_size=5"
        );
    }

    #[tokio::test]
    async fn test_balance_logs_mismatch_is_decode_error() {
        let transport = Arc::new(MockTransport::with_json(r#"{"success":true,"data":[1,2]}"#));

        let result = service(&transport).balance_logs(Pagination::default()).await;

        assert!(matches!(result, Err(RelayError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_unread_count_requires_field() {
        let transport = Arc::new(MockTransport::with_json(r#"{"success":true,"data":{}}"#));

        let result = service(&transport).unread_count().await;

        assert!(matches!(result, Err(RelayError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_update_profile_puts_string_map() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"message":"updated"}"#,
        ));
        let fields = BTreeMap::from([("display_name".to_string(), "New".to_string())]);

        let envelope = service(&transport).update_profile(&fields).await.unwrap();

        assert_eq!(envelope.message_text(), "updated");
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"display_name": "New"}));
    }

    #[tokio::test]
    async fn test_create_payment_sends_typed_product() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"order_no":"A1"}}"#,
        ));
        let Value::Object(fields) = json!({"product_type": "vip", "amount": 10}) else {
            unreachable!()
        };
        let payment = PaymentRequest::new(ProductType::Recharge, fields);

        let envelope = service(&transport).create_payment(&payment).await.unwrap();

        assert_eq!(envelope.data, Some(json!({"order_no": "A1"})));
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://backend.example/api/payment/create");
        let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"product_type": "recharge", "amount": 10}));
    }

    #[tokio::test]
    async fn test_opaque_payload_passes_through() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":true,"data":{"github":{"bound":true}}}"#,
        ));

        let data = service(&transport).third_party_status().await.unwrap();

        assert_eq!(data, json!({"github": {"bound": true}}));
    }

    #[tokio::test]
    async fn test_public_catalogue_keeps_failure_flag() {
        let transport = Arc::new(MockTransport::with_json(
            r#"{"success":false,"message":"disabled"}"#,
        ));

        let envelope = service(&transport).vip_levels().await.unwrap();

        assert!(!envelope.success);
        let request = transport.last_request().unwrap();
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("X-User-API-Key"), None);
    }

    #[tokio::test]
    async fn test_captcha_verify_forwards_answer() {
        let transport = Arc::new(MockTransport::with_json(r#"{"success":true}"#));
        let Value::Object(answer) = json!({"captcha_id": "c1", "answer": "42"}) else {
            unreachable!()
        };

        service(&transport).captcha_verify(answer).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["captcha_id"], "c1");
    }
}

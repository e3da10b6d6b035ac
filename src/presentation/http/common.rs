use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::application::Pagination;
use crate::domain::entities::Envelope;
use crate::domain::errors::RelayError;

pub const INVALID_BODY: &str = "invalid request body";

/// Local response wrapper.
#[derive(Debug, Serialize)]
pub struct LocalResponse<T = Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> LocalResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        })
    }
}

impl LocalResponse {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
            error: None,
        })
    }

    /// Mirrors a backend envelope, failure flag included.
    pub fn relayed(envelope: Envelope) -> Json<Self> {
        Json(Self {
            success: envelope.success,
            message: envelope.message,
            data: envelope.data,
            error: None,
        })
    }

    pub fn err(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: None,
            data: None,
            error: Some(message.into()),
        })
    }
}

fn failure(e: &RelayError) -> Response {
    warn!(error = %e, "Request failed");
    LocalResponse::err(e.to_string()).into_response()
}

pub fn into_response<T: Serialize>(result: Result<T, RelayError>) -> Response {
    match result {
        Ok(data) => LocalResponse::ok(data).into_response(),
        Err(e) => failure(&e),
    }
}

pub fn envelope_response(result: Result<Envelope, RelayError>) -> Response {
    match result {
        Ok(envelope) => LocalResponse::relayed(envelope).into_response(),
        Err(e) => failure(&e),
    }
}

pub fn invalid_body() -> Response {
    (StatusCode::BAD_REQUEST, LocalResponse::err(INVALID_BODY)).into_response()
}

/// JSON body whose rejection is answered in the local response shape.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(e) => {
                warn!(error = %e, "Rejected request body");
                Err(invalid_body())
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();
    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        latency_ms = duration.as_millis(),
        "Handled request"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relayed_keeps_failure_flag() {
        let Json(body) = LocalResponse::relayed(Envelope {
            success: false,
            message: Some("captcha required".to_string()),
            data: None,
        });

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "message": "captcha required"})
        );
    }

    #[test]
    fn test_error_shape() {
        let Json(body) = LocalResponse::err("configuration error: no active session");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "error": "configuration error: no active session"})
        );
    }

    #[test]
    fn test_page_query_defaults() {
        let pagination = PageQuery::default().pagination();

        assert_eq!((pagination.page(), pagination.page_size()), (1, 10));
    }
}

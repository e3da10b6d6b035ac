//! Local pages, settings and status routes.

use std::sync::Arc;

use axum::extract::{FromRequest, Query, Request, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::common::{LocalResponse, into_response, invalid_body};
use super::state::AppState;
use crate::application::SettingsUpdate;
use crate::domain::errors::RelayError;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");
pub const CONFIG_SAVED_REDIRECT: &str = "/?success=config_saved";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub configured: bool,
    pub has_token: bool,
    pub server_url: String,
    pub user_id: u64,
    pub port: u16,
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    let snapshot = state.context.snapshot();
    Json(StatusReport {
        configured: snapshot.settings.is_configured(),
        has_token: snapshot.bearer.is_some(),
        server_url: snapshot.settings.server_url,
        user_id: snapshot.settings.user_id,
        port: snapshot.settings.port,
    })
}

pub async fn token_status(State(state): State<Arc<AppState>>) -> Response {
    Json(json!({
        "success": true,
        "has_token": state.context.has_token(),
    }))
    .into_response()
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Accepts the settings form or the same fields as JSON.
pub async fn save_config(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if is_json(&request) {
        let Ok(Json(update)) = Json::<SettingsUpdate>::from_request(request, &()).await else {
            return invalid_body();
        };
        return match state.settings.execute(update) {
            Ok(_) => LocalResponse::message("settings saved").into_response(),
            Err(e) => into_response::<()>(Err(e)),
        };
    }

    let Ok(Form(update)) = Form::<SettingsUpdate>::from_request(request, &()).await else {
        return invalid_body();
    };
    match state.settings.execute(update) {
        Ok(_) => Redirect::to(CONFIG_SAVED_REDIRECT).into_response(),
        Err(e) => into_response::<()>(Err(e)),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenBrowserQuery {
    pub target: Option<String>,
}

fn browser_url(server_url: &str, target: Option<&str>) -> Result<String, RelayError> {
    if server_url.is_empty() {
        return Err(RelayError::configuration("server URL is not configured"));
    }
    match target.filter(|t| !t.is_empty()) {
        None => Ok(server_url.to_string()),
        Some(target @ ("login" | "profile" | "register")) => Ok(format!("{server_url}/{target}")),
        Some(other) => Err(RelayError::configuration(format!(
            "unknown browser target {other:?}"
        ))),
    }
}

pub async fn open_browser(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OpenBrowserQuery>,
) -> Response {
    let url = match browser_url(&state.context.settings().server_url, query.target.as_deref()) {
        Ok(url) => url,
        Err(e) => return into_response::<()>(Err(e)),
    };

    match state.browser.open(&url) {
        Ok(()) => {
            info!(url = %url, "Opened backend page");
            Json(json!({"success": true, "message": "browser opened", "data": {"url": url}}))
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Browser launch failed");
            LocalResponse::err(e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, "https://a.example" ; "no_target")]
    #[test_case(Some("login"), "https://a.example/login" ; "login")]
    #[test_case(Some("profile"), "https://a.example/profile" ; "profile")]
    #[test_case(Some("register"), "https://a.example/register" ; "register")]
    fn test_browser_url(target: Option<&str>, expected: &str) {
        assert_eq!(browser_url("https://a.example", target).unwrap(), expected);
    }

    #[test]
    fn test_browser_url_rejects_unknown_target() {
        assert!(browser_url("https://a.example", Some("../admin")).is_err());
    }

    #[test]
    fn test_browser_url_requires_server() {
        let err = browser_url("", Some("login")).unwrap_err();

        assert!(matches!(err, RelayError::Configuration { .. }));
    }
}

//! Routes relayed without credentials.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use serde_json::{Map, Value};

use super::common::{JsonBody, envelope_response};
use super::state::AppState;
use crate::application::SessionFlow;

pub async fn captcha_status(State(state): State<Arc<AppState>>) -> Response {
    envelope_response(state.accounts.captcha_status().await)
}

pub async fn captcha_generate(State(state): State<Arc<AppState>>) -> Response {
    envelope_response(state.accounts.captcha_generate().await)
}

pub async fn captcha_verify(
    State(state): State<Arc<AppState>>,
    JsonBody(answer): JsonBody<Map<String, Value>>,
) -> Response {
    envelope_response(state.accounts.captcha_verify(answer).await)
}

async fn bootstrap(state: &AppState, flow: SessionFlow, credentials: Map<String, Value>) -> Response {
    envelope_response(
        state
            .sessions
            .execute(flow, credentials)
            .await
            .map(|outcome| outcome.envelope),
    )
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(credentials): JsonBody<Map<String, Value>>,
) -> Response {
    bootstrap(&state, SessionFlow::Login, credentials).await
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(credentials): JsonBody<Map<String, Value>>,
) -> Response {
    bootstrap(&state, SessionFlow::Register, credentials).await
}

pub async fn vip_levels(State(state): State<Arc<AppState>>) -> Response {
    envelope_response(state.accounts.vip_levels().await)
}

pub async fn recharge_settings(State(state): State<Arc<AppState>>) -> Response {
    envelope_response(state.accounts.recharge_settings().await)
}

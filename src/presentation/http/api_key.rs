//! Routes authenticated with the static API key.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use super::common::into_response;
use super::state::AppState;

pub async fn profile(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.api_key_profile().await)
}

pub async fn balance(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.api_key_balance().await)
}

pub async fn exchange_token(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.exchange.execute().await)
}

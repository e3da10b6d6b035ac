//! Routes authenticated with the cached bearer session.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use serde_json::{Map, Value};

use super::common::{JsonBody, PageQuery, envelope_response, into_response};
use super::state::AppState;
use crate::application::{PaymentRequest, ProductType};

pub async fn profile(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.session_profile().await)
}

pub async fn messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    into_response(state.accounts.messages(query.pagination()).await)
}

pub async fn unread_count(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.unread_count().await)
}

pub async fn balance_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    into_response(state.accounts.balance_logs(query.pagination()).await)
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<BTreeMap<String, String>>,
) -> Response {
    envelope_response(state.accounts.update_profile(&fields).await)
}

pub async fn balance(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.session_balance().await)
}

pub async fn third_party_status(State(state): State<Arc<AppState>>) -> Response {
    into_response(state.accounts.third_party_status().await)
}

pub async fn payment_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Response {
    into_response(state.accounts.payment_orders(query.pagination()).await)
}

pub async fn read_all_messages(State(state): State<Arc<AppState>>) -> Response {
    envelope_response(state.accounts.read_all_messages().await)
}

async fn create_payment(
    state: &AppState,
    product_type: ProductType,
    fields: Map<String, Value>,
) -> Response {
    let payment = PaymentRequest::new(product_type, fields);
    envelope_response(state.accounts.create_payment(&payment).await)
}

pub async fn purchase_vip(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> Response {
    create_payment(&state, ProductType::Vip, fields).await
}

pub async fn recharge(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> Response {
    create_payment(&state, ProductType::Recharge, fields).await
}

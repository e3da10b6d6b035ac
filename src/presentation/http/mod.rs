//! Inbound HTTP surface.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

mod api_key;
pub mod common;
mod public;
mod session;
mod state;
mod system;

pub use state::AppState;

/// Builds the local router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages and settings
        .route("/", get(system::index))
        .route("/config", post(system::save_config))
        .route("/api/status", get(system::status))
        .route("/api/token-status", get(system::token_status))
        .route("/open-browser", get(system::open_browser))
        // Static API key
        .route("/api/profile", get(api_key::profile))
        .route("/api/balance", get(api_key::balance))
        .route(
            "/api/token",
            get(api_key::exchange_token).post(api_key::exchange_token),
        )
        // Bearer session
        .route("/api/jwt/profile", get(session::profile))
        .route("/api/jwt/messages", get(session::messages))
        .route("/api/jwt/unread-count", get(session::unread_count))
        .route("/api/jwt/balance-logs", get(session::balance_logs))
        .route("/api/jwt/update-profile", post(session::update_profile))
        .route("/api/jwt/balance", get(session::balance))
        .route("/api/jwt/third-party-status", get(session::third_party_status))
        .route("/api/jwt/payment-orders", get(session::payment_orders))
        .route("/api/jwt/read-all-messages", post(session::read_all_messages))
        .route("/api/jwt/purchase-vip", post(session::purchase_vip))
        .route("/api/jwt/recharge", post(session::recharge))
        // Public
        .route("/api/captcha/status", get(public::captcha_status))
        .route("/api/captcha/generate", post(public::captcha_generate))
        .route("/api/captcha/verify", post(public::captcha_verify))
        .route("/api/login", post(public::login))
        .route("/api/register", post(public::register))
        .route("/api/vip-levels", get(public::vip_levels))
        .route("/api/recharge-settings", get(public::recharge_settings))
        // Health
        .route("/healthz", get(system::healthz))
        .layer(middleware::from_fn(common::request_logger))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

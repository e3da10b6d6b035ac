//! Application services.

pub mod account_service;
pub mod relay_client;

pub use account_service::AccountService;
pub use relay_client::{REQUEST_TIMEOUT, RelayClient, RelayRequest};

//! Use case implementations.

mod exchange_token_use_case;
mod session_bootstrap_use_case;
mod settings_use_cases;

pub use exchange_token_use_case::ExchangeTokenUseCase;
pub use session_bootstrap_use_case::SessionBootstrapUseCase;
pub use settings_use_cases::{
    ENV_PORT, ENV_SERVER_URL, ENV_USER_API_KEY, ENV_USER_ID, LoadSettingsUseCase,
    UpdateSettingsUseCase,
};

use std::sync::Arc;

use crate::application::{
    AccountService, ExchangeTokenUseCase, RelayClient, RelayContext, SessionBootstrapUseCase,
    UpdateSettingsUseCase,
};
use crate::domain::ports::{BrowserPort, SettingsStoragePort, TransportPort};

/// Shared handler state.
pub struct AppState {
    pub context: Arc<RelayContext>,
    pub accounts: AccountService,
    pub exchange: ExchangeTokenUseCase,
    pub sessions: SessionBootstrapUseCase,
    pub settings: UpdateSettingsUseCase,
    pub browser: Arc<dyn BrowserPort>,
}

impl AppState {
    /// Wires the use cases over one relay client.
    #[must_use]
    pub fn new(
        context: Arc<RelayContext>,
        transport: Arc<dyn TransportPort>,
        storage: Arc<dyn SettingsStoragePort>,
        browser: Arc<dyn BrowserPort>,
    ) -> Self {
        let relay = Arc::new(RelayClient::new(transport, context.clone()));
        Self {
            accounts: AccountService::new(relay.clone()),
            exchange: ExchangeTokenUseCase::new(relay.clone()),
            sessions: SessionBootstrapUseCase::new(relay),
            settings: UpdateSettingsUseCase::new(context.clone(), storage),
            context,
            browser,
        }
    }
}

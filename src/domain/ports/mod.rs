mod browser_port;
mod settings_storage_port;
mod transport_port;

pub use browser_port::BrowserPort;
pub use settings_storage_port::SettingsStoragePort;
pub use transport_port::{HttpMethod, OutboundRequest, RawResponse, TransportPort};

#[cfg(test)]
pub use settings_storage_port::MockSettingsStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::browser_port::mock::MockBrowser;
    pub use super::transport_port::mock::MockTransport;
}

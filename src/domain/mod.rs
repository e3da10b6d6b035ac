//! Domain layer with core entities, errors and port definitions.

/// Credential mode definitions.
pub mod credential_mode;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use credential_mode::CredentialMode;
pub use entities::{BearerToken, Envelope, Settings};
pub use errors::RelayError;
pub use ports::{BrowserPort, HttpMethod, SettingsStoragePort, TransportPort};

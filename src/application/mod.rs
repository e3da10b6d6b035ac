//! Application layer with the relay client, use cases and DTOs.

/// Shared relay state.
pub mod context;
/// Data transfer objects.
pub mod dto;
/// Backend endpoint catalogue.
pub mod endpoints;
/// Relay services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use context::{RelayContext, SessionSnapshot};
pub use dto::{PaymentRequest, ProductType, SessionFlow, SessionOutcome, SettingsUpdate};
pub use endpoints::Pagination;
pub use services::{AccountService, RelayClient, RelayRequest};
pub use use_cases::{
    ExchangeTokenUseCase, LoadSettingsUseCase, SessionBootstrapUseCase, UpdateSettingsUseCase,
};

//! Data transfer objects for the application layer.

mod auth_dto;
mod payment_dto;
mod settings_dto;

pub use auth_dto::{SessionFlow, SessionOutcome};
pub use payment_dto::{PaymentRequest, ProductType};
pub use settings_dto::{NumericField, SettingsUpdate};

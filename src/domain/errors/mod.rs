//! Domain error types.

mod browser_error;
mod relay_error;

pub use browser_error::BrowserError;
pub use relay_error::{BoxError, RelayError};

//! Browser launch error types.

use thiserror::Error;

/// Browser launch error variants.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to open browser: {0}")]
    LaunchFailed(String),
}

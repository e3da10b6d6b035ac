//! Desktop browser port definition.

use crate::domain::errors::BrowserError;

/// Port for opening a URL in the user's browser.
pub trait BrowserPort: Send + Sync {
    /// Opens the URL without waiting for the browser to exit.
    ///
    /// # Errors
    /// Returns error if no browser could be launched.
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

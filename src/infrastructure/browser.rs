use tracing::{debug, warn};

use crate::domain::errors::BrowserError;
use crate::domain::ports::BrowserPort;

/// Opens URLs with the platform's default browser.
#[derive(Clone, Default)]
pub struct SystemBrowser {}

impl SystemBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl BrowserPort for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        debug!(url, "Opening browser");
        opener::open_browser(url).map_err(|e| {
            warn!(error = %e, url, "Failed to open browser");
            BrowserError::LaunchFailed(e.to_string())
        })
    }
}

//! Presentation layer with the local HTTP surface.

/// HTTP routes and handlers.
pub mod http;

pub use http::{AppState, router};

// Application state module
// Read-only runtime state shared across connections

use super::types::Config;

/// Shared application state.
///
/// Holds only the configuration loaded at startup. Nothing is mutable
/// after startup and request handling is pure, so concurrent requests
/// share this through an `Arc` with no locking.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Contact email reported in every response envelope.
    pub fn official_email(&self) -> &str {
        &self.config.app.official_email
    }
}

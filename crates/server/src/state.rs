use reshare_core::{RedirectHandler, SanitizedConfig};

/// Shared application state
pub struct AppState {
    handler: RedirectHandler,
}

impl AppState {
    pub fn new(handler: RedirectHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &RedirectHandler {
        &self.handler
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(self.handler.config())
    }
}

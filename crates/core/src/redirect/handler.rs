//! Invocation handler: OpenURL parameters in, redirect out.

use std::sync::Arc;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::metrics::REDIRECTS_TOTAL;
use crate::openurl::{build_candidates, OpenUrlFields};
use crate::probe::SearchProbe;
use crate::strategy::{select_strategy, SelectionResult};

use super::{InvocationEvent, RedirectResponse};

/// Handles one invocation at a time; cheap to share behind an `Arc`.
pub struct RedirectHandler {
    config: Config,
    probe: Arc<dyn SearchProbe>,
}

impl RedirectHandler {
    pub fn new(config: Config, probe: Arc<dyn SearchProbe>) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the redirect for an invocation event.
    ///
    /// Fails only when the workspace is not configured. Missing or
    /// unrecognized parameters and probe failures all end in a redirect to
    /// the unfiltered results page.
    pub async fn handle(&self, event: &InvocationEvent) -> Result<RedirectResponse, ConfigError> {
        let workspace = self.config.require_workspace()?;

        let selection = match event.params() {
            Some(params) => {
                let fields = OpenUrlFields::from_params(params);
                let candidates = build_candidates(&fields);
                select_strategy(&candidates, self.probe.as_ref()).await
            }
            None => SelectionResult::none(),
        };

        REDIRECTS_TOTAL
            .with_label_values(&[selection.strategy_label()])
            .inc();

        let redirect = RedirectResponse::to_results(&selection);
        info!(
            workspace = workspace,
            strategy = selection.strategy_label(),
            location = %redirect.location,
            "Redirecting"
        );

        Ok(redirect)
    }
}

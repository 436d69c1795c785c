//! Error reporting setup.
//!
//! Reporting is opt-in: it is only initialized when a DSN is configured.
//! Core code never depends on whether it is active.

use std::borrow::Cow;

use sentry::types::Dsn;
use tracing::{info, warn};

/// Initialize Sentry when `dsn` is set.
///
/// Returns the client guard, which must be kept alive for the lifetime of the
/// process so buffered events are flushed on shutdown. An empty or invalid
/// DSN leaves reporting disabled.
pub fn init_error_reporting(
    dsn: Option<&str>,
    environment: Option<&str>,
) -> Option<sentry::ClientInitGuard> {
    let dsn = dsn.filter(|d| !d.is_empty())?;

    let dsn: Dsn = match dsn.parse() {
        Ok(dsn) => dsn,
        Err(e) => {
            warn!(error = %e, "Invalid SENTRY_DSN, error reporting disabled");
            return None;
        }
    };

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        environment: environment.map(|env| Cow::Owned(env.to_string())),
        release: sentry::release_name!(),
        ..Default::default()
    });

    info!(
        "Sentry DSN found, exceptions will be sent to Sentry with env={}",
        environment.unwrap_or("None")
    );

    Some(guard)
}

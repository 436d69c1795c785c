use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reshare_core::{load_config, validate_config, RedirectHandler, VufindProbe, SEARCH_API_URL};
use reshare_server::{api::create_router, reporting::init_error_reporting, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging; error events are forwarded to Sentry once it is bound
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    let config = load_config().context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    let _reporting =
        init_error_reporting(config.sentry_dsn.as_deref(), config.workspace.as_deref());

    match config.workspace.as_deref() {
        Some(workspace) if !workspace.is_empty() => info!("Workspace: {}", workspace),
        _ => warn!("WORKSPACE is not set, every invocation will fail until it is"),
    }

    let probe = VufindProbe::new(&config.probe).context("Failed to create search API probe")?;
    info!(
        "Probing {} with a {}s timeout",
        SEARCH_API_URL, config.probe.timeout_secs
    );

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let handler = RedirectHandler::new(config, Arc::new(probe));
    let app = create_router(Arc::new(AppState::new(handler)));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

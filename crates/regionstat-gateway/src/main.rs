//! regionstat service
//!
//! - Loads `regionstat.yaml` (or the path given as the first argument)
//! - Loads the telemetry dataset once; any failure aborts startup
//! - Serves `POST /api` plus ops endpoints until Ctrl-C / SIGTERM

use tracing_subscriber::{fmt, EnvFilter};

use regionstat_core::error::{RegionStatError, Result};
use regionstat_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "regionstat failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    tracing::info!(path = %cfg_path, "loading config");

    let cfg = config::load_from_file(&cfg_path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "regionstat starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RegionStatError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| RegionStatError::Internal(format!("server failed: {e}")))?;

    tracing::info!("regionstat stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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

    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}

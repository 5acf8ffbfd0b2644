//! Axum router wiring.
//!
//! - `GET  /`        : usage message
//! - `POST /api`     : per-region metrics
//! - `GET  /healthz`, `/readyz`, `/metrics` : ops

use axum::{
    extract::DefaultBodyLimit,
    http::{Method, Request},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.cfg().server.max_body_bytes;
    let cors_enabled = state.cfg().cors.enabled;

    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            tracing::info_span!("http_request", method = %req.method(), uri = %req.uri())
        })
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Micros),
        );

    let mut router = Router::new()
        .route("/", get(api::root))
        .route("/api", post(api::analyze_latency))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body_bytes));

    if cors_enabled {
        router = router.layer(cors_layer());
    }

    router.layer(trace).with_state(state)
}

/// Any origin, GET/POST, any header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

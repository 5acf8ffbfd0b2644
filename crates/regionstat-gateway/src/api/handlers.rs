use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use regionstat_core::MetricsReport;

use crate::api::ApiError;
use crate::app_state::AppState;

pub const ROOT_MESSAGE: &str = "Latency Analysis API. POST to /api with {\"regions\": [...], \"threshold_ms\": 180} to get metrics.";

/// Body of `POST /api`.
#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    state.metrics().requests.inc(&[("route", "/"), ("status", "200")]);
    Json(json!({ "message": ROOT_MESSAGE }))
}

/// Compute per-region latency/uptime metrics.
pub async fn analyze_latency(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsReport>, ApiError> {
    let metrics = state.metrics();

    let Json(req) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            let err = ApiError::from(rejection);
            tracing::warn!(error = %err.0, "metrics request rejected");
            metrics
                .rejected_requests
                .inc(&[("code", err.0.client_code().as_str())]);
            metrics
                .requests
                .inc(&[("route", "/api"), ("status", err.status().as_str())]);
            return Err(err);
        }
    };

    tracing::debug!(regions = req.regions.len(), threshold_ms = req.threshold_ms, "computing metrics");

    let started = Instant::now();
    let report = state.engine().compute(&req.regions, req.threshold_ms);
    metrics.compute_duration.observe(&[], started.elapsed());

    for (_, m) in report.iter() {
        let outcome = if m.is_empty() { "miss" } else { "hit" };
        metrics.regions_evaluated.inc(&[("outcome", outcome)]);
    }
    metrics.requests.inc(&[("route", "/api"), ("status", "200")]);

    Ok(Json(report))
}

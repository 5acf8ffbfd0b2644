//! HTTP surface tests driven through the router with `oneshot`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use regionstat_core::TelemetryStore;
use regionstat_gateway::{api::ROOT_MESSAGE, app_state::AppState, config, router};

const DATASET: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../regionstat-core/tests/vectors/telemetry.json"
);

fn test_config(cors: bool) -> config::ServiceConfig {
    let yaml = format!(
        "version: 1\ntelemetry:\n  path: \"{DATASET}\"\ncors:\n  enabled: {cors}\nserver:\n  max_body_bytes: 2048\n"
    );
    config::load_from_str(&yaml).unwrap()
}

fn test_state() -> AppState {
    AppState::new(test_config(true)).unwrap()
}

fn test_router() -> Router {
    router::build_router(test_state())
}

fn post_api(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn root_returns_usage_message() {
    let resp = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "message": ROOT_MESSAGE }));
}

#[tokio::test]
async fn post_api_computes_metrics() {
    let req = json!({ "regions": ["amer", "nowhere"], "threshold_ms": 150 });
    let resp = test_router().oneshot(post_api(req.to_string())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["amer"]["avg_latency"].as_f64(), Some(150.0));
    assert_eq!(v["amer"]["p95_latency"].as_f64(), Some(195.0));
    assert_eq!(v["amer"]["avg_uptime"].as_f64(), Some(99.7));
    assert_eq!(v["amer"]["breaches"].as_u64(), Some(1));
    assert_eq!(
        v["nowhere"],
        json!({ "avg_latency": null, "p95_latency": null, "avg_uptime": null, "breaches": 0 })
    );
}

#[tokio::test]
async fn empty_regions_yield_empty_object() {
    let req = json!({ "regions": [], "threshold_ms": 180 });
    let resp = test_router().oneshot(post_api(req.to_string())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({}));
}

#[tokio::test]
async fn malformed_requests_are_unprocessable() {
    let bodies = [
        "not json".to_string(),
        json!({ "regions": ["apac"] }).to_string(),
        json!({ "threshold_ms": 180 }).to_string(),
        json!({ "regions": "apac", "threshold_ms": 180 }).to_string(),
        json!({ "regions": [1, 2], "threshold_ms": 180 }).to_string(),
        json!({ "regions": ["apac"], "threshold_ms": "fast" }).to_string(),
    ];
    for body in bodies {
        let resp = test_router().oneshot(post_api(body.clone())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        let v = body_json(resp).await;
        assert_eq!(v["error"]["code"], "INVALID_REQUEST", "{body}");
    }
}

#[tokio::test]
async fn missing_content_type_is_unprocessable() {
    let req = Request::builder()
        .method("POST")
        .uri("/api")
        .body(Body::from(json!({ "regions": [], "threshold_ms": 1 }).to_string()))
        .unwrap();
    let resp = test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let regions: Vec<String> = (0..500).map(|i| format!("region-{i}")).collect();
    let req = json!({ "regions": regions, "threshold_ms": 180 });
    let resp = test_router().oneshot(post_api(req.to_string())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api")
        .header("origin", "https://dashboard.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = test_router().oneshot(preflight).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    let methods = resp.headers()["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST") && methods.contains("GET"), "{methods}");

    let get = Request::builder()
        .uri("/")
        .header("origin", "https://dashboard.example.com")
        .body(Body::empty())
        .unwrap();
    let resp = test_router().oneshot(get).await.unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_can_be_disabled() {
    let app = router::build_router(AppState::new(test_config(false)).unwrap());
    let get = Request::builder()
        .uri("/")
        .header("origin", "https://dashboard.example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(get).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn ops_endpoints_report_state() {
    let state = test_state();
    let app = router::build_router(state.clone());

    let resp = app
        .clone()
        .oneshot(post_api(json!({ "regions": ["apac", "x"], "threshold_ms": 1 }).to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_text(resp).await, "ok");

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let text = body_text(resp).await;
    assert!(text.contains("regionstat_records_loaded 8"), "{text}");
    assert!(text.contains("regionstat_regions_evaluated_total{outcome=\"hit\"} 1"), "{text}");
    assert!(text.contains("regionstat_regions_evaluated_total{outcome=\"miss\"} 1"), "{text}");
    assert_eq!(
        state.metrics().requests.get(&[("route", "/api"), ("status", "200")]),
        1
    );

    state.set_draining();
    let resp = app
        .oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn rejected_requests_are_counted() {
    let state = test_state();
    let app = router::build_router(state.clone());
    let resp = app.oneshot(post_api("{")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.metrics().rejected_requests.get(&[("code", "INVALID_REQUEST")]), 1);
    assert_eq!(
        state.metrics().requests.get(&[("route", "/api"), ("status", "422")]),
        1
    );
}

#[test]
fn missing_dataset_fails_startup() {
    let cfg = config::load_from_str("version: 1\ntelemetry:\n  path: \"/nonexistent/telemetry.json\"\n").unwrap();
    let err = AppState::new(cfg).err().expect("must fail");
    assert_eq!(err.client_code().as_str(), "DATA_LOAD_FAILED");
}

#[test]
fn with_store_skips_file_loading() {
    let cfg = test_config(true);
    let store = TelemetryStore::from_json_str(r#"[{"region": "x", "latency_ms": 1, "uptime_pct": 100}]"#).unwrap();
    let state = AppState::with_store(cfg, store);
    assert_eq!(state.engine().store().len(), 1);
}

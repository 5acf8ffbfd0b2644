//! Metrics engine vector tests against a fixed telemetry dataset.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod vector_loader;

use std::collections::BTreeMap;
use std::sync::Arc;

use regionstat_core::{MetricsEngine, RegionMetrics, TelemetryStore};
use vector_loader::{load_cases, vector_path};

fn engine() -> MetricsEngine {
    let store = TelemetryStore::load(vector_path("telemetry.json")).unwrap();
    MetricsEngine::new(Arc::new(store))
}

#[test]
fn dataset_loads() {
    let e = engine();
    assert_eq!(e.store().len(), 8);
    assert_eq!(e.store().regions(), vec!["amer", "apac", "emea"]);
}

#[test]
fn vectors_match_expected_metrics() {
    let e = engine();
    for case in load_cases("cases.json") {
        let report = e.compute(&case.request.regions, case.request.threshold_ms);
        let got: BTreeMap<String, RegionMetrics> = report
            .iter()
            .map(|(r, m)| (r.to_string(), m.clone()))
            .collect();
        assert_eq!(got, case.expect, "{}", case.description);
    }
}

#[test]
fn report_keeps_request_order_on_the_wire() {
    let e = engine();
    let regions: Vec<String> = ["emea", "APAC", "apac", "amer"].iter().map(|s| s.to_string()).collect();
    let s = serde_json::to_string(&e.compute(&regions, 180.0)).unwrap();
    let pos: Vec<usize> = ["\"emea\"", "\"APAC\"", "\"apac\"", "\"amer\""]
        .iter()
        .map(|k| s.find(k).unwrap())
        .collect();
    assert!(pos.windows(2).all(|w| w[0] < w[1]), "{s}");
}

#[test]
fn unknown_regions_are_never_errors() {
    let e = engine();
    for region in ["", " ", "Apac", "apac\n", "moon-base"] {
        assert_eq!(e.region_metrics(region, 0.0), RegionMetrics::empty());
    }
}

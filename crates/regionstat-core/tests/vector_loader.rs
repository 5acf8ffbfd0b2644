//! JSON test vector loader shared by the metrics vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;

use regionstat_core::RegionMetrics;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub request: VectorRequest,
    pub expect: BTreeMap<String, RegionMetrics>,
}

#[derive(Debug, Deserialize)]
pub struct VectorRequest {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

pub fn vector_path(name: &str) -> String {
    format!("{}/tests/vectors/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_cases(name: &str) -> Vec<TestVector> {
    let s = fs::read_to_string(vector_path(name)).expect("read vector file");
    serde_json::from_str(&s).expect("parse vector file")
}

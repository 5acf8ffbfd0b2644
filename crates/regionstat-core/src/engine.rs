//! Per-region metrics engine.
//!
//! Each requested region is computed independently from the shared store:
//! mean latency, p95 latency, mean uptime, and the number of observations
//! strictly above the caller's threshold. Regions without data produce an
//! all-null entry rather than an error.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::RegionMetrics;
use crate::stats::{mean, percentile_linear, round_to};
use crate::store::TelemetryStore;

/// Percentile reported as `p95_latency`.
pub const P95: f64 = 0.95;

const LATENCY_PLACES: usize = 2;
const UPTIME_PLACES: usize = 3;

#[derive(Debug, Clone)]
pub struct MetricsEngine {
    store: Arc<TelemetryStore>,
}

impl MetricsEngine {
    pub fn new(store: Arc<TelemetryStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TelemetryStore {
        &self.store
    }

    /// Compute metrics for every requested region.
    ///
    /// Keys keep the caller's first-seen order. A region listed twice is
    /// computed twice; the later (identical) result replaces the earlier one.
    pub fn compute(&self, regions: &[String], threshold_ms: f64) -> MetricsReport {
        let mut report = MetricsReport::with_capacity(regions.len());
        for region in regions {
            report.insert(region.clone(), self.region_metrics(region, threshold_ms));
        }
        report
    }

    pub fn region_metrics(&self, region: &str, threshold_ms: f64) -> RegionMetrics {
        let records = self.store.records_for(region);
        if records.is_empty() {
            return RegionMetrics::empty();
        }

        let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
        let uptimes: Vec<f64> = records.iter().map(|r| r.uptime_pct).collect();
        let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

        RegionMetrics {
            avg_latency: mean(&latencies).map(|v| round_to(v, LATENCY_PLACES)),
            p95_latency: percentile_linear(&latencies, P95).map(|v| round_to(v, LATENCY_PLACES)),
            avg_uptime: mean(&uptimes).map(|v| round_to(v, UPTIME_PLACES)),
            breaches,
        }
    }
}

/// Region name -> metrics, in request order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<(String, RegionMetrics)>,
}

impl MetricsReport {
    pub fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n) }
    }

    pub fn insert(&mut self, region: String, metrics: RegionMetrics) {
        match self.entries.iter_mut().find(|(r, _)| *r == region) {
            Some((_, slot)) => *slot = metrics,
            None => self.entries.push((region, metrics)),
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries.iter().find(|(r, _)| r == region).map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionMetrics)> {
        self.entries.iter().map(|(r, m)| (r.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, metrics) in &self.entries {
            map.serialize_entry(region, metrics)?;
        }
        map.end()
    }
}

//! Telemetry input records and the per-region output shape.

use serde::{Deserialize, Serialize};

/// One telemetry observation.
///
/// Unknown fields in the source (`service`, `timestamp`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
}

/// Aggregates computed for one requested region.
///
/// All float fields are `None` (JSON `null`) when the region has no records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: Option<f64>,
    pub p95_latency: Option<f64>,
    pub avg_uptime: Option<f64>,
    pub breaches: u64,
}

impl RegionMetrics {
    /// Result for a region with no observations.
    pub fn empty() -> Self {
        Self {
            avg_latency: None,
            p95_latency: None,
            avg_uptime: None,
            breaches: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.avg_latency.is_none() && self.p95_latency.is_none() && self.avg_uptime.is_none()
    }
}

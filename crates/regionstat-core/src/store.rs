//! Immutable in-memory telemetry store.
//!
//! Loaded once at startup and shared via `Arc`; there is no mutation or
//! reload path, so concurrent readers need no locking.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{RegionStatError, Result};
use crate::record::TelemetryRecord;

#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
}

impl TelemetryStore {
    /// Read and fully parse a JSON array of records from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| {
            RegionStatError::DataLoad(format!("read {} failed: {e}", path.display()))
        })?;
        let store = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), records = store.len(), "telemetry loaded");
        Ok(store)
    }

    /// Parse a JSON array of records. Any malformed record fails the whole load.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<TelemetryRecord> = serde_json::from_str(s)
            .map_err(|e| RegionStatError::DataLoad(format!("invalid telemetry json: {e}")))?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<TelemetryRecord>) -> Result<Self> {
        for (i, r) in records.iter().enumerate() {
            if r.latency_ms < 0.0 {
                return Err(RegionStatError::DataLoad(format!(
                    "record {i} (region={}): latency_ms must be non-negative, got {}",
                    r.region, r.latency_ms
                )));
            }
        }
        Ok(Self { records })
    }

    /// All records whose region matches exactly (case-sensitive).
    pub fn records_for(&self, region: &str) -> Vec<&TelemetryRecord> {
        self.records.iter().filter(|r| r.region == region).collect()
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

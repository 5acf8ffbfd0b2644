//! Shared application state for the regionstat service.
//!
//! Built once at startup: the telemetry store is loaded fully before the
//! state exists, so a running server never sees a partial dataset.

use std::sync::Arc;

use regionstat_core::error::Result;
use regionstat_core::{MetricsEngine, TelemetryStore};

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    engine: Arc<MetricsEngine>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: ServiceConfig,
}

impl AppState {
    /// Load the telemetry file named in the config and build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let store = TelemetryStore::load(&cfg.telemetry.path)?;
        tracing::info!(
            path = %cfg.telemetry.path,
            records = store.len(),
            regions = ?store.regions(),
            "telemetry dataset loaded"
        );
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an already loaded store.
    pub fn with_store(cfg: ServiceConfig, store: TelemetryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            engine: Arc::new(MetricsEngine::new(Arc::new(store))),
            metrics: Arc::new(ServiceMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn engine(&self) -> Arc<MetricsEngine> {
        Arc::clone(&self.engine)
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauges rendered alongside the registry on `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("regionstat_records_loaded", self.engine.store().len() as u64)]
    }
}

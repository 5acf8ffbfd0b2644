//! regionstat core: telemetry data model, the read-only store, and the
//! per-region metrics engine.
//!
//! This crate carries no HTTP or runtime dependencies. The gateway loads a
//! [`TelemetryStore`] once at startup and hands it to a [`MetricsEngine`]
//! shared across requests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad datasets surface as `RegionStatError::DataLoad`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod engine;
pub mod error;
pub mod record;
pub mod stats;
pub mod store;

pub use engine::{MetricsEngine, MetricsReport, P95};
pub use record::{RegionMetrics, TelemetryRecord};
pub use store::TelemetryStore;

/// Shared result type.
pub use error::{Result, RegionStatError};

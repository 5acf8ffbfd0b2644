//! regionstat gateway library entry.
//!
//! This crate wires config loading, the telemetry store, the metrics engine,
//! and the HTTP surface into one service. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;

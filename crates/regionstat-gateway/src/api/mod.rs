//! Public HTTP API: the metrics endpoint and the informational root.

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::{analyze_latency, root, MetricsRequest, ROOT_MESSAGE};

//! Service config loader (strict parsing).

pub mod schema;

use std::fs;

use regionstat_core::error::{RegionStatError, Result};

pub use schema::{CorsSection, ServerSection, ServiceConfig, TelemetrySection};

/// Default config path when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "regionstat.yaml";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RegionStatError::InvalidConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| RegionStatError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

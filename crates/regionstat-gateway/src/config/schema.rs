use std::net::SocketAddr;

use serde::Deserialize;
use regionstat_core::error::{RegionStatError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub telemetry: TelemetrySection,

    #[serde(default)]
    pub cors: CorsSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RegionStatError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.telemetry.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=16 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(RegionStatError::InvalidConfig(
                "server.max_body_bytes must be between 1024 and 16777216".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RegionStatError::InvalidConfig(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    /// JSON array of `{region, latency_ms, uptime_pct}` records.
    pub path: String,
}

impl TelemetrySection {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(RegionStatError::InvalidConfig("telemetry.path must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self { enabled: default_cors_enabled() }
    }
}

fn default_cors_enabled() -> bool {
    true
}

//! Shared error type across regionstat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Telemetry dataset could not be loaded.
    DataLoadFailed,
    /// Malformed request body.
    InvalidRequest,
    /// Config file failed to parse or validate.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::DataLoadFailed => "DATA_LOAD_FAILED",
            ClientCode::InvalidRequest => "INVALID_REQUEST",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RegionStatError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RegionStatError {
    #[error("data load failed: {0}")]
    DataLoad(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RegionStatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RegionStatError::DataLoad(_) => ClientCode::DataLoadFailed,
            RegionStatError::InvalidRequest(_) => ClientCode::InvalidRequest,
            RegionStatError::InvalidConfig(_) => ClientCode::InvalidConfig,
            RegionStatError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RegionStatError::Internal(_) => ClientCode::Internal,
        }
    }
}

//! Mapping from `RegionStatError` to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use regionstat_core::error::{ClientCode, RegionStatError};

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError(pub RegionStatError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegionStatError> for ApiError {
    fn from(e: RegionStatError) -> Self {
        Self(e)
    }
}

// Every body the JSON extractor refuses (syntax, shape, content type, size)
// is a client error on the request.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(RegionStatError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.0.client_code().as_str(),
                "message": self.0.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

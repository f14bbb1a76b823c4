//! Mapping of crate errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::error::{ErrorCategory, TaazaError};

/// JSON body sent for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub category: ErrorCategory,
}

#[derive(Debug)]
pub struct ApiError(pub TaazaError);

impl From<TaazaError> for ApiError {
    fn from(e: TaazaError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TaazaError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            TaazaError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            TaazaError::Upstream { .. } | TaazaError::Format(_) => StatusCode::BAD_GATEWAY,
            TaazaError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TaazaError::HttpClient(_) | TaazaError::Io(_) | TaazaError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self.0, "request failed");
        }
        let body = ErrorBody {
            error: self.0.user_message(),
            category: self.0.category(),
        };
        (status, Json(body)).into_response()
    }
}

//! Error to HTTP response mapping.
//!
//! | error | status |
//! |---|---|
//! | validation | 400 |
//! | not found | 404 |
//! | upstream 4xx | upstream status |
//! | other upstream failures, internal | 500 |
//!
//! Bodies are the plain-text error message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::employee::EmployeeError;

impl EmployeeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EmployeeError::Validation(_) => StatusCode::BAD_REQUEST,
            EmployeeError::NotFound(_) => StatusCode::NOT_FOUND,
            EmployeeError::Upstream(e) => e
                .passthrough_status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            EmployeeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Log a failed request at a level matching its status.
pub fn log_failure(err: &EmployeeError, context: &str) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), error = %err, "{}", context);
    } else {
        tracing::warn!(status = status.as_u16(), error = %err, "{}", context);
    }
}

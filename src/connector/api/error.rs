//! Mapping from [`DomainError`] to HTTP responses.
//!
//! Client input problems become a 400 with a fixed body. Everything else is
//! a 500 with a fixed, user-safe body; upstream detail never reaches the
//! caller.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use super::dto::ErrorBody;
use crate::domain::DomainError;

#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::invalid_input(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::BAD_REQUEST {
            debug!("Rejected chat request: {}", self.0);
            ErrorBody::invalid_request()
        } else {
            // Detail was already logged where the failure happened
            debug!("Responding with chat fallback for: {}", self.0);
            ErrorBody::chat_failed()
        };
        (status, Json(body)).into_response()
    }
}

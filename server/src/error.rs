use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uuid::Uuid;

use crate::api::ErrorResponse;

/// Errors surfaced to API callers.
///
/// Every variant is a client error; none of them leaves the collection
/// partially modified. Body rejections are 400 except an oversized body (413).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Request path id ({path}) and request body id ({}) must match", .body.as_deref().unwrap_or("none"))]
    IdMismatch { path: String, body: Option<String> },

    #[error("Recipe {0} not found")]
    NotFound(Uuid),

    #[error("Invalid recipe id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingField(_)
            | ApiError::Validation(_)
            | ApiError::IdMismatch { .. }
            | ApiError::InvalidId(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status.as_u16(), error = %self, "rejecting request");

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Parse a recipe id taken from a request path.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

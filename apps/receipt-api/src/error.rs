//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt API                            │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                    │
//! │         │                                                               │
//! │         ├── JsonRejection ─────────► MalformedBody ──► 400             │
//! │         │                                                               │
//! │         ├── ValidationError ───────► Validation ─────► 400             │
//! │         │                                                               │
//! │         ├── unknown id ────────────► NotFound ───────► 404             │
//! │         │                                                               │
//! │         ├── PointsError ───────────► Internal ───────► 500             │
//! │         │                                                               │
//! │         └── StoreError ────────────► Internal ───────► 500             │
//! │                                                                         │
//! │  Every response body is { "msg": "<Display of the error>" }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal details are logged, never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{PointsError, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::store::StoreError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub msg: String,
}

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The receipt failed a validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body was not JSON, or a field had the wrong JSON type.
    /// Holds the extractor's explanation for the logs.
    #[error("Request body is not a valid receipt document")]
    MalformedBody(String),

    #[error("No receipt found for this ID")]
    NotFound,

    /// Holds the underlying cause for the logs.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<PointsError> for ApiError {
    fn from(err: PointsError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => match std::error::Error::source(err) {
                Some(reason) => warn!(?err, %reason, "Receipt rejected"),
                None => warn!(?err, "Receipt rejected"),
            },
            ApiError::MalformedBody(detail) => warn!(%detail, "Malformed request body"),
            ApiError::NotFound => {}
            ApiError::Internal(detail) => error!(%detail, "Internal error"),
        }

        let body = ErrorBody {
            msg: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

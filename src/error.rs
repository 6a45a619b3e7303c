//! Market error types with HTTP status code mapping.
//!
//! [`MarketError`] is the central error type for the pipeline. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{RoomId, TokenId};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid amount: must be a positive number"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Pipeline error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1099 | Validation      | 400 Bad Request            |
/// | 1100–1199 | Authentication  | 401 Unauthorized           |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Operation       | 502 / 500                  |
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketError {
    /// Token with the given ID was not found.
    #[error("token not found: {0}")]
    TokenNotFound(TokenId),

    /// Pump room with the given ID was not found.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// Investment amount is zero, negative, or not a number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A required field was missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Request validation failed for another reason.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Action attempted without an authenticated session.
    #[error("authentication required")]
    AuthenticationRequired,

    /// The settlement backend rejected or failed the operation.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MarketError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidAmount(_) => 1002,
            Self::MissingField(_) => 1003,
            Self::AuthenticationRequired => 1101,
            Self::TokenNotFound(_) => 2001,
            Self::RoomNotFound(_) => 2002,
            Self::OperationFailed(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidAmount(_) | Self::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::TokenNotFound(_) | Self::RoomNotFound(_) => StatusCode::NOT_FOUND,
            Self::OperationFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` for errors caused by the caller's input, which never
    /// mutate any state.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::InvalidAmount(_) | Self::MissingField(_)
        )
    }
}

impl MarketError {
    /// Renders the error response with `details` attached, e.g. the
    /// user-facing notification text of a failed action.
    #[must_use]
    pub fn into_response_with_details(self, details: impl Into<String>) -> Response {
        self.render(Some(details.into()))
    }

    fn render(self, details: Option<String>) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.render(None)
    }
}

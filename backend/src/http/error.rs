//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::ephemeris::EphemerisError;
use crate::models::DateSpecError;

/// Message returned for failures whose details stay in the server logs.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "Internal server error during calculation. Check server logs.";

/// API error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// The ephemeris backend rejected the computation
    Computation(EphemerisError),
    /// Anything else; the message is logged, never returned
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Computation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body returned to the caller.
    pub fn body(&self) -> ApiError {
        match self {
            AppError::BadRequest(msg) => ApiError::new(msg.clone()),
            AppError::Computation(e) => {
                ApiError::new(format!("Swiss Ephemeris calculation failed: {}", e))
            }
            AppError::Internal(_) => ApiError::new(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::BadRequest(msg) => debug!("Rejected request: {}", msg),
            AppError::Computation(e) => error!("Swiss Ephemeris calculation error: {}", e),
            AppError::Internal(msg) => error!("API endpoint error: {}", msg),
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<DateSpecError> for AppError {
    fn from(err: DateSpecError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<EphemerisError> for AppError {
    fn from(err: EphemerisError) -> Self {
        AppError::Computation(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Task join error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MISSING_DATE_PARAMETERS;

    #[test]
    fn test_missing_parameters_is_bad_request() {
        let err = AppError::from(DateSpecError::Missing);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), ApiError::new(MISSING_DATE_PARAMETERS));
    }

    #[test]
    fn test_computation_error_embeds_text() {
        let err = AppError::from(EphemerisError::InvalidDate("year 99999 out of range".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body().error,
            "Swiss Ephemeris calculation failed: invalid date: year 99999 out of range"
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::Internal("thread 'worker' panicked at src/secret.rs".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_body_serialization() {
        let json = serde_json::to_value(ApiError::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "boom"}));
    }
}

//! Mapping of offer errors onto HTTP responses.

use crate::offer_actor::OfferError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// Malformed request that never reached the orchestrator.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Offer(e) => match e {
                OfferError::InvalidProduct(_) => (StatusCode::BAD_REQUEST, "INVALID_PRODUCT"),
                OfferError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
                OfferError::UnrecognizedStatus(_) => {
                    (StatusCode::BAD_REQUEST, "UNRECOGNIZED_STATUS")
                }
                OfferError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                OfferError::ConcurrentModification(_) => {
                    (StatusCode::CONFLICT, "CONCURRENT_MODIFICATION")
                }
                OfferError::PersistenceFailure(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_FAILURE")
                }
                OfferError::InvariantViolation { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INVARIANT_VIOLATION")
                }
                OfferError::DateParse(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATE_PARSE"),
                OfferError::IllegalTransition { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "ILLEGAL_TRANSITION")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error = kind, %message, "Request failed");
        } else {
            warn!(error = kind, %message, "Request rejected");
        }

        let error_response = ErrorResponse {
            error: kind.to_string(),
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

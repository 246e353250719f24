//! Unified error handling for route handlers.
//!
//! Provides an `AppError` type that logs server-side failures before
//! responding to the client. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use basket_core::BasketError;
use thiserror::Error;

/// Application-level error type for the basket server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Basket engine rejected the operation.
    #[error("Basket error: {0}")]
    Basket(#[from] BasketError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Basket(BasketError::QuantityOverflow { .. } | BasketError::PriceOverflow(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Basket(BasketError::LockPoisoned) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                PricingErrorResponse {
                    error_type: "not_found".to_string(),
                    message: self.to_string(),
                    details: None,
                },
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                PricingErrorResponse {
                    error_type: "bad_request".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
            AppError::Pricing(PricingError::Overflow) => {
                tracing::error!("Pricing overflow");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    PricingErrorResponse::from(&PricingError::Overflow),
                )
            }
            AppError::Pricing(e) => (StatusCode::BAD_REQUEST, PricingErrorResponse::from(e)),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

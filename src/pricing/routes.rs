//! HTTP handlers for the pricing API.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};

use super::requests::QuoteRequest;
use super::responses::{CatalogResponse, QuoteResponse};
use super::services;

/// Routes mounted under `/api/pricing`.
pub fn router() -> Router {
    Router::new()
        .route("/quote", post(quote))
        .route("/options", get(options))
}

/// Price a job and return the itemized breakdown.
async fn quote(payload: std::result::Result<Json<QuoteRequest>, JsonRejection>) -> Result<Json<QuoteResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let quote = services::quote(&request).map_err(|e| {
        tracing::warn!(error = %e, service_type = %request.service_type, "Quote rejected");
        e
    })?;

    Ok(Json(QuoteResponse::from(quote)))
}

/// List every selectable option with its multiplier.
async fn options() -> Json<CatalogResponse> {
    Json(services::catalog())
}

//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to price a job.
///
/// Keys stay as strings here so that an unknown value surfaces as a
/// descriptive `invalid_parameter` error instead of a generic body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service_type: String,
    pub resolution: String,
    pub aspect_ratio: String,
    #[serde(default)]
    pub fps: Option<String>,
    #[serde(default)]
    pub dpi: Option<String>,
    pub complexity: String,
    #[serde(default)]
    pub length_in_seconds: Option<Decimal>,
    #[serde(default)]
    pub custom_fps: Option<Decimal>,
    #[serde(default)]
    pub custom_dpi: Option<Decimal>,
    #[serde(default)]
    pub additional_factors: Vec<String>,
    /// Display currency code; USD when omitted.
    #[serde(default)]
    pub currency: Option<String>,
}

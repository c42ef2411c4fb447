//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::breakdown::{BreakdownLine, Effect};
use super::services::{PricingError, Quote};
use super::tables::ServiceType;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// One row of the itemized breakdown
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLineResponse {
    pub item: String,
    pub value: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
    pub multiplier_display: String,
    pub effect: Effect,
    pub is_total: bool,
}

impl From<&BreakdownLine> for BreakdownLineResponse {
    fn from(line: &BreakdownLine) -> Self {
        Self {
            item: line.item.clone(),
            value: line.value.clone(),
            multiplier: line.multiplier,
            multiplier_display: line.multiplier_display(),
            effect: line.effect(),
            is_total: line.is_total(),
        }
    }
}

/// Response for a priced quote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub service_type: ServiceType,
    /// Price before additional factors, USD.
    pub base_price: MoneyResponse,
    /// Final price, USD.
    pub price: MoneyResponse,
    /// Final price in the requested currency.
    pub converted_price: MoneyResponse,
    pub formatted_price: String,
    pub breakdown: Vec<BreakdownLineResponse>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            service_type: quote.service_type,
            base_price: MoneyResponse {
                amount: quote.base_price,
                currency: "USD".to_string(),
            },
            price: MoneyResponse {
                amount: quote.price,
                currency: "USD".to_string(),
            },
            converted_price: MoneyResponse {
                amount: quote.converted_price,
                currency: quote.currency.code().to_string(),
            },
            formatted_price: quote.formatted_price,
            breakdown: quote.breakdown.iter().map(BreakdownLineResponse::from).collect(),
        }
    }
}

/// A selectable table key and its multiplier
#[derive(Debug, Serialize)]
pub struct MultiplierOption {
    pub key: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

/// A service type and its USD base rate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRateOption {
    pub key: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_rate: Decimal,
}

/// A display currency
#[derive(Debug, Serialize)]
pub struct CurrencyOption {
    pub code: String,
    pub symbol: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

/// Response for the options listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub service_types: Vec<BaseRateOption>,
    pub resolutions: Vec<MultiplierOption>,
    pub aspect_ratios: Vec<MultiplierOption>,
    pub frame_rates: Vec<MultiplierOption>,
    pub dpis: Vec<MultiplierOption>,
    pub complexities: Vec<MultiplierOption>,
    pub additional_factors: Vec<MultiplierOption>,
    pub currencies: Vec<CurrencyOption>,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        Self {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details: err.details(),
        }
    }
}

//! Pricing service functions.
//!
//! Turns a quote request into a priced, itemized quote: parses the selected
//! keys, dispatches on the service type, applies surcharges, converts to the
//! display currency and builds the breakdown.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::breakdown::{get_price_breakdown, BreakdownLine, BreakdownParams};
use super::calculators::{
    apply_additional_factors, calculate_animation_price, calculate_cgi_price,
    calculate_still_frame_price, calculate_vfx_price, convert_currency, format_money,
    round_whole,
};
use super::requests::QuoteRequest;
use super::responses::{
    BaseRateOption, CatalogResponse, CurrencyOption, MultiplierOption,
};
use super::tables::{
    AdditionalFactor, AspectRatio, Complexity, Currency, Dpi, FrameRate, Resolution, ServiceType,
};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A key that is not in the relevant table.
    InvalidParameter { parameter: String, value: String },
    /// A numeric input outside its allowed range.
    InvalidNumber {
        parameter: String,
        value: Decimal,
        reason: String,
    },
    /// A parameter the service type needs was not supplied.
    MissingParameter {
        parameter: String,
        service_type: ServiceType,
    },
    DuplicateFactor { factor: AdditionalFactor },
    /// Arithmetic left the representable decimal range.
    Overflow,
}

impl PricingError {
    /// Stable machine-readable name, used in error responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { .. } => "invalid_parameter",
            PricingError::InvalidNumber { .. } => "invalid_number",
            PricingError::MissingParameter { .. } => "missing_parameter",
            PricingError::DuplicateFactor { .. } => "duplicate_factor",
            PricingError::Overflow => "overflow",
        }
    }

    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            PricingError::InvalidParameter { parameter, value } => Some(serde_json::json!({
                "parameter": parameter,
                "value": value,
            })),
            PricingError::InvalidNumber { parameter, value, .. } => Some(serde_json::json!({
                "parameter": parameter,
                "value": value.to_string(),
            })),
            PricingError::MissingParameter {
                parameter,
                service_type,
            } => Some(serde_json::json!({
                "parameter": parameter,
                "serviceType": service_type.as_str(),
            })),
            PricingError::DuplicateFactor { factor } => Some(serde_json::json!({
                "factor": factor.as_str(),
            })),
            PricingError::Overflow => None,
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidParameter { parameter, value } => {
                write!(f, "Invalid parameter {}: '{}' is not a known value", parameter, value)
            }
            PricingError::InvalidNumber {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid {} ({}): {}", parameter, value, reason)
            }
            PricingError::MissingParameter {
                parameter,
                service_type,
            } => {
                write!(f, "Missing parameter {} required for {}", parameter, service_type)
            }
            PricingError::DuplicateFactor { factor } => {
                write!(f, "Additional factor '{}' selected more than once", factor)
            }
            PricingError::Overflow => write!(f, "Price exceeds the supported range"),
        }
    }
}

impl std::error::Error for PricingError {}

/// Service-specific dimensions of a quote.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceParams {
    StillFrame {
        dpi: Dpi,
        custom_dpi: Option<Decimal>,
    },
    Animation {
        fps: FrameRate,
        custom_fps: Option<Decimal>,
        length_in_seconds: Decimal,
    },
    Cgi {
        length_in_seconds: Option<Decimal>,
    },
    Vfx {
        fps: FrameRate,
        custom_fps: Option<Decimal>,
        length_in_seconds: Decimal,
    },
}

impl ServiceParams {
    pub fn service_type(&self) -> ServiceType {
        match self {
            ServiceParams::StillFrame { .. } => ServiceType::StillFrame,
            ServiceParams::Animation { .. } => ServiceType::Animation,
            ServiceParams::Cgi { .. } => ServiceType::Cgi,
            ServiceParams::Vfx { .. } => ServiceType::Vfx,
        }
    }
}

/// A validated quote request with every key resolved to its table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
    pub complexity: Complexity,
    pub service: ServiceParams,
    pub additional_factors: Vec<AdditionalFactor>,
    pub currency: Currency,
}

fn required<T>(
    value: Option<T>,
    parameter: &str,
    service_type: ServiceType,
) -> Result<T, PricingError> {
    value.ok_or_else(|| PricingError::MissingParameter {
        parameter: parameter.to_string(),
        service_type,
    })
}

impl TryFrom<&QuoteRequest> for QuoteInput {
    type Error = PricingError;

    /// Parameters that do not apply to the requested service type are ignored.
    fn try_from(request: &QuoteRequest) -> Result<Self, Self::Error> {
        let service_type = ServiceType::from_str(&request.service_type)?;
        let fps = request.fps.as_deref().map(FrameRate::from_str).transpose()?;
        let dpi = request.dpi.as_deref().map(Dpi::from_str).transpose()?;

        let service = match service_type {
            ServiceType::StillFrame => ServiceParams::StillFrame {
                dpi: required(dpi, "dpi", service_type)?,
                custom_dpi: request.custom_dpi,
            },
            ServiceType::Animation => ServiceParams::Animation {
                fps: required(fps, "fps", service_type)?,
                custom_fps: request.custom_fps,
                length_in_seconds: required(
                    request.length_in_seconds,
                    "lengthInSeconds",
                    service_type,
                )?,
            },
            ServiceType::Cgi => ServiceParams::Cgi {
                length_in_seconds: request.length_in_seconds,
            },
            ServiceType::Vfx => ServiceParams::Vfx {
                fps: required(fps, "fps", service_type)?,
                custom_fps: request.custom_fps,
                length_in_seconds: required(
                    request.length_in_seconds,
                    "lengthInSeconds",
                    service_type,
                )?,
            },
        };

        let mut additional_factors = Vec::with_capacity(request.additional_factors.len());
        for name in &request.additional_factors {
            let factor = AdditionalFactor::from_str(name)?;
            if additional_factors.contains(&factor) {
                return Err(PricingError::DuplicateFactor { factor });
            }
            additional_factors.push(factor);
        }

        let currency = match request.currency.as_deref() {
            Some(code) => Currency::from_str(code)?,
            None => Currency::default(),
        };

        Ok(QuoteInput {
            resolution: Resolution::from_str(&request.resolution)?,
            aspect_ratio: AspectRatio::from_str(&request.aspect_ratio)?,
            complexity: Complexity::from_str(&request.complexity)?,
            service,
            additional_factors,
            currency,
        })
    }
}

/// Result of a quote calculation
#[derive(Debug, Clone)]
pub struct Quote {
    pub service_type: ServiceType,
    /// Rounded USD price before additional factors.
    pub base_price: Decimal,
    /// Rounded USD price after additional factors.
    pub price: Decimal,
    pub currency: Currency,
    /// `price` expressed in `currency`.
    pub converted_price: Decimal,
    pub formatted_price: String,
    pub breakdown: Vec<BreakdownLine>,
}

/// Price a validated quote.
pub fn calculate_quote(input: &QuoteInput) -> Result<Quote, PricingError> {
    let service_type = input.service.service_type();
    let mut params = BreakdownParams::new(input.resolution, input.aspect_ratio, input.complexity);
    params.additional_factors = input.additional_factors.clone();
    params.currency = input.currency;

    let base_price = match &input.service {
        ServiceParams::StillFrame { dpi, custom_dpi } => {
            params.dpi = Some(*dpi);
            params.custom_dpi = *custom_dpi;
            calculate_still_frame_price(
                input.resolution,
                input.aspect_ratio,
                *dpi,
                input.complexity,
                *custom_dpi,
            )?
        }
        ServiceParams::Animation {
            fps,
            custom_fps,
            length_in_seconds,
        } => {
            params.fps = Some(*fps);
            params.custom_fps = *custom_fps;
            params.length_in_seconds = Some(*length_in_seconds);
            calculate_animation_price(
                input.resolution,
                input.aspect_ratio,
                *fps,
                input.complexity,
                *length_in_seconds,
                *custom_fps,
            )?
        }
        ServiceParams::Cgi { length_in_seconds } => {
            params.length_in_seconds = *length_in_seconds;
            calculate_cgi_price(
                input.resolution,
                input.aspect_ratio,
                input.complexity,
                *length_in_seconds,
            )?
        }
        ServiceParams::Vfx {
            fps,
            custom_fps,
            length_in_seconds,
        } => {
            params.fps = Some(*fps);
            params.custom_fps = *custom_fps;
            params.length_in_seconds = Some(*length_in_seconds);
            calculate_vfx_price(
                input.resolution,
                input.aspect_ratio,
                *fps,
                input.complexity,
                *length_in_seconds,
                *custom_fps,
            )?
        }
    };

    let final_price = apply_additional_factors(base_price, &input.additional_factors)?;
    let breakdown = get_price_breakdown(service_type, final_price, &params)?;
    let price = round_whole(final_price);

    tracing::debug!(
        service_type = %service_type,
        base_price = %base_price,
        price = %price,
        currency = %input.currency,
        "Quote calculated"
    );

    Ok(Quote {
        service_type,
        base_price,
        price,
        currency: input.currency,
        converted_price: convert_currency(final_price, input.currency)?,
        formatted_price: format_money(final_price, input.currency)?,
        breakdown,
    })
}

/// Parse, validate and price a raw quote request.
pub fn quote(request: &QuoteRequest) -> Result<Quote, PricingError> {
    let input = QuoteInput::try_from(request)?;
    calculate_quote(&input)
}

fn options<T: Copy>(
    keys: &[T],
    key: impl Fn(&T) -> &'static str,
    multiplier: impl Fn(&T) -> Decimal,
) -> Vec<MultiplierOption> {
    keys.iter()
        .map(|k| MultiplierOption {
            key: key(k).to_string(),
            multiplier: multiplier(k),
        })
        .collect()
}

/// Every selectable option with its multiplier, for populating form controls.
pub fn catalog() -> CatalogResponse {
    CatalogResponse {
        service_types: ServiceType::ALL
            .iter()
            .map(|s| BaseRateOption {
                key: s.as_str().to_string(),
                base_rate: s.base_rate(),
            })
            .collect(),
        resolutions: options(&Resolution::ALL, Resolution::as_str, Resolution::multiplier),
        aspect_ratios: options(&AspectRatio::ALL, AspectRatio::as_str, AspectRatio::multiplier),
        frame_rates: options(&FrameRate::ALL, FrameRate::as_str, FrameRate::multiplier),
        dpis: options(&Dpi::ALL, Dpi::as_str, Dpi::multiplier),
        complexities: options(&Complexity::ALL, Complexity::as_str, Complexity::multiplier),
        additional_factors: options(
            &AdditionalFactor::ALL,
            AdditionalFactor::as_str,
            AdditionalFactor::multiplier,
        ),
        currencies: Currency::ALL
            .iter()
            .map(|c| CurrencyOption {
                code: c.code().to_string(),
                symbol: c.symbol().to_string(),
                name: c.display_name().to_string(),
                rate: c.rate(),
            })
            .collect(),
    }
}

//! Itemized price breakdown.
//!
//! Rebuilds the multiplier chain behind a price for display. Lines come in a
//! fixed order: base rate, resolution, aspect ratio, FPS, DPI, complexity,
//! additional factors (selection order), length, and finally the total.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{dpi_multiplier, format_money, fps_multiplier};
use super::services::PricingError;
use super::tables::{AdditionalFactor, AspectRatio, Complexity, Currency, Dpi, FrameRate, Resolution, ServiceType};

pub const TOTAL_LABEL: &str = "Total Price";

/// Parameters that went into a price, as the caller selected them.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownParams {
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
    pub fps: Option<FrameRate>,
    pub custom_fps: Option<Decimal>,
    pub dpi: Option<Dpi>,
    pub custom_dpi: Option<Decimal>,
    pub complexity: Complexity,
    pub length_in_seconds: Option<Decimal>,
    pub additional_factors: Vec<AdditionalFactor>,
    pub currency: Currency,
}

impl BreakdownParams {
    /// Minimal parameter set; optional dimensions start empty and currency is USD.
    pub fn new(resolution: Resolution, aspect_ratio: AspectRatio, complexity: Complexity) -> Self {
        Self {
            resolution,
            aspect_ratio,
            fps: None,
            custom_fps: None,
            dpi: None,
            custom_dpi: None,
            complexity,
            length_in_seconds: None,
            additional_factors: Vec::new(),
            currency: Currency::default(),
        }
    }
}

/// How a line moves the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Increase,
    Decrease,
    Neutral,
}

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownLine {
    pub item: String,
    pub value: String,
    /// Zero on the total line, where it carries no meaning.
    pub multiplier: Decimal,
}

impl BreakdownLine {
    fn new(item: impl Into<String>, value: impl Into<String>, multiplier: Decimal) -> Self {
        Self {
            item: item.into(),
            value: value.into(),
            multiplier,
        }
    }

    pub fn is_total(&self) -> bool {
        self.item == TOTAL_LABEL
    }

    /// Two-decimal multiplier, or `"-"` for the total line.
    pub fn multiplier_display(&self) -> String {
        if self.is_total() {
            "-".to_string()
        } else {
            format!("{:.2}", self.multiplier)
        }
    }

    pub fn effect(&self) -> Effect {
        if self.is_total() || self.multiplier == Decimal::ONE {
            Effect::Neutral
        } else if self.multiplier > Decimal::ONE {
            Effect::Increase
        } else {
            Effect::Decrease
        }
    }
}

/// Build the breakdown for `final_price` (USD, after additional factors).
///
/// FPS and DPI lines report the multiplier that was actually applied, so a
/// `Custom` selection with a custom value shows the clamped derived
/// multiplier rather than the table placeholder.
pub fn get_price_breakdown(
    service_type: ServiceType,
    final_price: Decimal,
    params: &BreakdownParams,
) -> Result<Vec<BreakdownLine>, PricingError> {
    let currency = params.currency;
    let mut lines = vec![
        BreakdownLine::new(
            "Base Rate",
            format_money(service_type.base_rate(), currency)?,
            Decimal::ONE,
        ),
        BreakdownLine::new(
            "Resolution",
            params.resolution.as_str(),
            params.resolution.multiplier(),
        ),
        BreakdownLine::new(
            "Aspect Ratio",
            params.aspect_ratio.as_str(),
            params.aspect_ratio.multiplier(),
        ),
    ];

    if let Some(fps) = params.fps {
        lines.push(BreakdownLine::new(
            "FPS",
            fps.as_str(),
            fps_multiplier(fps, params.custom_fps)?,
        ));
    }

    if let Some(dpi) = params.dpi {
        lines.push(BreakdownLine::new(
            "DPI",
            dpi.as_str(),
            dpi_multiplier(dpi, params.custom_dpi)?,
        ));
    }

    lines.push(BreakdownLine::new(
        "Complexity",
        params.complexity.as_str(),
        params.complexity.multiplier(),
    ));

    for factor in &params.additional_factors {
        lines.push(BreakdownLine::new(
            factor.as_str(),
            factor.as_str(),
            factor.multiplier(),
        ));
    }

    if let Some(length) = params.length_in_seconds {
        lines.push(BreakdownLine::new(
            "Length",
            format!("{} seconds", length.normalize()),
            length,
        ));
    }

    lines.push(BreakdownLine::new(
        TOTAL_LABEL,
        format_money(final_price, currency)?,
        Decimal::ZERO,
    ));

    Ok(lines)
}

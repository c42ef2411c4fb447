//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.
//! Every price is `base rate × multipliers [× length]`, rounded to a whole
//! USD amount.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::services::PricingError;
use super::tables::{AdditionalFactor, AspectRatio, Complexity, Currency, Dpi, FrameRate, Resolution, ServiceType};

/// Lower bound for a multiplier derived from a custom FPS or DPI value.
pub const CUSTOM_MULTIPLIER_MIN: Decimal = dec!(0.8);
/// Upper bound for a multiplier derived from a custom FPS or DPI value.
pub const CUSTOM_MULTIPLIER_MAX: Decimal = dec!(2.5);
/// Custom frame rates are normalized against this value.
pub const REFERENCE_FPS: Decimal = dec!(30);
/// Custom DPI values are normalized against this value.
pub const REFERENCE_DPI: Decimal = dec!(150);

/// Round to the nearest whole unit, halves away from zero.
///
/// Prices are never negative, so this matches ordinary "round half up".
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use render_pricing::pricing::round_whole;
///
/// assert_eq!(round_whole(dec!(826.875)), dec!(827));
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// assert_eq!(round_whole(dec!(2.49)), dec!(2));
/// ```
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiply all factors together, failing instead of panicking on overflow.
pub(crate) fn product(factors: &[Decimal]) -> Result<Decimal, PricingError> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, f| acc.checked_mul(*f))
        .ok_or(PricingError::Overflow)
}

fn require_positive(parameter: &str, value: Decimal) -> Result<Decimal, PricingError> {
    if value <= Decimal::ZERO {
        return Err(PricingError::InvalidNumber {
            parameter: parameter.to_string(),
            value,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

fn clamp_custom(ratio: Decimal) -> Decimal {
    ratio.clamp(CUSTOM_MULTIPLIER_MIN, CUSTOM_MULTIPLIER_MAX)
}

/// Multiplier for a custom frame rate: `fps / 30`, clamped to `[0.8, 2.5]`.
pub fn custom_fps_multiplier(fps: Decimal) -> Result<Decimal, PricingError> {
    let fps = require_positive("customFps", fps)?;
    Ok(clamp_custom(fps / REFERENCE_FPS))
}

/// Multiplier for a custom DPI: `dpi / 150`, clamped to `[0.8, 2.5]`.
pub fn custom_dpi_multiplier(dpi: Decimal) -> Result<Decimal, PricingError> {
    let dpi = require_positive("customDpi", dpi)?;
    Ok(clamp_custom(dpi / REFERENCE_DPI))
}

/// The FPS multiplier actually applied to a price.
///
/// A custom value is only consulted when the key is `Custom`; otherwise the
/// table multiplier wins and `custom` is ignored.
pub fn fps_multiplier(fps: FrameRate, custom: Option<Decimal>) -> Result<Decimal, PricingError> {
    match (fps, custom) {
        (FrameRate::Custom, Some(value)) => custom_fps_multiplier(value),
        _ => Ok(fps.multiplier()),
    }
}

/// The DPI multiplier actually applied to a price. See [`fps_multiplier`].
pub fn dpi_multiplier(dpi: Dpi, custom: Option<Decimal>) -> Result<Decimal, PricingError> {
    match (dpi, custom) {
        (Dpi::Custom, Some(value)) => custom_dpi_multiplier(value),
        _ => Ok(dpi.multiplier()),
    }
}

/// Calculate price for a still frame render.
pub fn calculate_still_frame_price(
    resolution: Resolution,
    aspect_ratio: AspectRatio,
    dpi: Dpi,
    complexity: Complexity,
    custom_dpi: Option<Decimal>,
) -> Result<Decimal, PricingError> {
    let price = product(&[
        ServiceType::StillFrame.base_rate(),
        resolution.multiplier(),
        aspect_ratio.multiplier(),
        dpi_multiplier(dpi, custom_dpi)?,
        complexity.multiplier(),
    ])?;

    Ok(round_whole(price))
}

/// Calculate price for an animation. The base rate is per second of footage.
pub fn calculate_animation_price(
    resolution: Resolution,
    aspect_ratio: AspectRatio,
    fps: FrameRate,
    complexity: Complexity,
    length_in_seconds: Decimal,
    custom_fps: Option<Decimal>,
) -> Result<Decimal, PricingError> {
    let length = require_positive("lengthInSeconds", length_in_seconds)?;

    let price = product(&[
        ServiceType::Animation.base_rate(),
        resolution.multiplier(),
        aspect_ratio.multiplier(),
        fps_multiplier(fps, custom_fps)?,
        complexity.multiplier(),
        length,
    ])?;

    Ok(round_whole(price))
}

/// Calculate price for CGI. There is no frame-rate factor; length defaults to 1.
pub fn calculate_cgi_price(
    resolution: Resolution,
    aspect_ratio: AspectRatio,
    complexity: Complexity,
    length_in_seconds: Option<Decimal>,
) -> Result<Decimal, PricingError> {
    let length = require_positive("lengthInSeconds", length_in_seconds.unwrap_or(Decimal::ONE))?;

    let price = product(&[
        ServiceType::Cgi.base_rate(),
        resolution.multiplier(),
        aspect_ratio.multiplier(),
        complexity.multiplier(),
        length,
    ])?;

    Ok(round_whole(price))
}

/// Calculate price for VFX work.
pub fn calculate_vfx_price(
    resolution: Resolution,
    aspect_ratio: AspectRatio,
    fps: FrameRate,
    complexity: Complexity,
    length_in_seconds: Decimal,
    custom_fps: Option<Decimal>,
) -> Result<Decimal, PricingError> {
    let length = require_positive("lengthInSeconds", length_in_seconds)?;

    let price = product(&[
        ServiceType::Vfx.base_rate(),
        resolution.multiplier(),
        aspect_ratio.multiplier(),
        fps_multiplier(fps, custom_fps)?,
        complexity.multiplier(),
        length,
    ])?;

    Ok(round_whole(price))
}

/// Apply selected surcharges in selection order. The result is not rounded.
pub fn apply_additional_factors(
    price: Decimal,
    factors: &[AdditionalFactor],
) -> Result<Decimal, PricingError> {
    factors.iter().try_fold(price, |acc, factor| {
        acc.checked_mul(factor.multiplier()).ok_or(PricingError::Overflow)
    })
}

/// Convert a USD amount into `currency`, rounded to a whole unit.
pub fn convert_currency(amount: Decimal, currency: Currency) -> Result<Decimal, PricingError> {
    let converted = amount
        .checked_mul(currency.rate())
        .ok_or(PricingError::Overflow)?;
    Ok(round_whole(converted))
}

/// Converted amount prefixed by the currency symbol, e.g. `"€5060"`.
pub fn format_money(amount: Decimal, currency: Currency) -> Result<String, PricingError> {
    let converted = convert_currency(amount, currency)?;
    Ok(format!("{}{}", currency.symbol(), converted.normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_whole tests ====================

    #[test]
    fn test_round_whole_half_goes_up() {
        assert_eq!(round_whole(dec!(0.5)), dec!(1));
        assert_eq!(round_whole(dec!(826.875)), dec!(827));
        assert_eq!(round_whole(dec!(29403.0)), dec!(29403));
        assert_eq!(round_whole(dec!(4.4999)), dec!(4));
    }

    // ==================== custom multiplier tests ====================

    #[test]
    fn test_custom_fps_multiplier_clamps() {
        assert_eq!(custom_fps_multiplier(dec!(1)).unwrap(), dec!(0.8));
        assert_eq!(custom_fps_multiplier(dec!(45)).unwrap(), dec!(1.5));
        assert_eq!(custom_fps_multiplier(dec!(240)).unwrap(), dec!(2.5));
    }

    #[test]
    fn test_custom_dpi_multiplier_clamps() {
        assert_eq!(custom_dpi_multiplier(dec!(1)).unwrap(), dec!(0.8));
        assert_eq!(custom_dpi_multiplier(dec!(225)).unwrap(), dec!(1.5));
        assert_eq!(custom_dpi_multiplier(dec!(240)).unwrap(), dec!(1.6));
        assert_eq!(custom_dpi_multiplier(dec!(450)).unwrap(), dec!(2.5));
    }

    #[test]
    fn test_custom_multiplier_rejects_non_positive() {
        assert!(matches!(
            custom_fps_multiplier(dec!(0)),
            Err(PricingError::InvalidNumber { .. })
        ));
        assert!(matches!(
            custom_dpi_multiplier(dec!(-72)),
            Err(PricingError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_custom_value_ignored_for_table_keys() {
        assert_eq!(fps_multiplier(FrameRate::Fps60, Some(dec!(240))).unwrap(), dec!(1.8));
        assert_eq!(dpi_multiplier(Dpi::Dpi300, Some(dec!(1))).unwrap(), dec!(1.4));
    }

    #[test]
    fn test_custom_key_without_value_uses_table() {
        assert_eq!(fps_multiplier(FrameRate::Custom, None).unwrap(), dec!(3.0));
        assert_eq!(dpi_multiplier(Dpi::Custom, None).unwrap(), dec!(2.5));
    }

    // ==================== price function tests ====================

    #[test]
    fn test_cgi_price_example() {
        let price = calculate_cgi_price(
            Resolution::Hd1080,
            AspectRatio::Widescreen,
            Complexity::Medium,
            Some(dec!(10)),
        )
        .unwrap();
        assert_eq!(price, dec!(5500));
    }

    #[test]
    fn test_cgi_default_length_is_one() {
        let omitted =
            calculate_cgi_price(Resolution::Uhd4k, AspectRatio::Ultrawide, Complexity::High, None)
                .unwrap();
        let one = calculate_cgi_price(
            Resolution::Uhd4k,
            AspectRatio::Ultrawide,
            Complexity::High,
            Some(dec!(1)),
        )
        .unwrap();
        assert_eq!(omitted, one);
        // 500 * 2.2 * 1.3 * 1.8 = 2574
        assert_eq!(omitted, dec!(2574));
    }

    #[test]
    fn test_vfx_price_example() {
        let price = calculate_vfx_price(
            Resolution::Uhd4k,
            AspectRatio::Widescreen,
            FrameRate::Fps60,
            Complexity::High,
            dec!(5),
            None,
        )
        .unwrap();
        assert_eq!(price, dec!(29403));
    }

    #[test]
    fn test_still_frame_custom_dpi_example() {
        // 450 / 150 = 3.0, clamped to 2.5
        let price = calculate_still_frame_price(
            Resolution::Qhd2k,
            AspectRatio::Square,
            Dpi::Custom,
            Complexity::Low,
            Some(dec!(450)),
        )
        .unwrap();
        assert_eq!(price, dec!(827));
    }

    #[test]
    fn test_still_frame_table_dpi() {
        // 350 * 1.0 * 1.0 * 1.4 * 1.0 = 490
        let price = calculate_still_frame_price(
            Resolution::Hd1080,
            AspectRatio::Standard,
            Dpi::Dpi300,
            Complexity::Medium,
            None,
        )
        .unwrap();
        assert_eq!(price, dec!(490));
    }

    #[test]
    fn test_animation_custom_fps() {
        // 150 * 1.0 * 1.0 * (48 / 30 = 1.6) * 1.0 * 10 = 2400
        let price = calculate_animation_price(
            Resolution::Hd1080,
            AspectRatio::Standard,
            FrameRate::Custom,
            Complexity::Medium,
            dec!(10),
            Some(dec!(48)),
        )
        .unwrap();
        assert_eq!(price, dec!(2400));
    }

    #[test]
    fn test_animation_rejects_zero_length() {
        let result = calculate_animation_price(
            Resolution::Hd1080,
            AspectRatio::Standard,
            FrameRate::Fps24,
            Complexity::Medium,
            dec!(0),
            None,
        );
        match result {
            Err(PricingError::InvalidNumber { parameter, .. }) => {
                assert_eq!(parameter, "lengthInSeconds")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_fractional_length_is_not_clamped() {
        // 150 * 1.0 * 1.0 * 1.0 * 1.0 * 0.5 = 75
        let price = calculate_animation_price(
            Resolution::Hd1080,
            AspectRatio::Standard,
            FrameRate::Fps24,
            Complexity::Medium,
            dec!(0.5),
            None,
        )
        .unwrap();
        assert_eq!(price, dec!(75));
    }

    #[test]
    fn test_prices_increase_with_resolution_and_complexity() {
        let mut previous = Decimal::ZERO;
        for resolution in Resolution::ALL {
            let price = calculate_vfx_price(
                resolution,
                AspectRatio::Widescreen,
                FrameRate::Fps24,
                Complexity::Medium,
                dec!(3),
                None,
            )
            .unwrap();
            assert!(price > previous, "{} did not increase price", resolution);
            previous = price;
        }

        let mut previous = Decimal::ZERO;
        for complexity in Complexity::ALL {
            let price = calculate_still_frame_price(
                Resolution::Hd720,
                AspectRatio::Square,
                Dpi::Dpi72,
                complexity,
                None,
            )
            .unwrap();
            assert!(price > previous, "{} did not increase price", complexity);
            previous = price;
        }
    }

    #[test]
    fn test_prices_increase_with_length() {
        let mut previous = Decimal::ZERO;
        for seconds in [1, 2, 5, 30, 120] {
            let price = calculate_animation_price(
                Resolution::Hd720,
                AspectRatio::Square,
                FrameRate::Fps24,
                Complexity::Low,
                Decimal::from(seconds),
                None,
            )
            .unwrap();
            assert!(price > previous);
            previous = price;
        }
    }

    #[test]
    fn test_huge_length_overflows_cleanly() {
        let result = calculate_vfx_price(
            Resolution::Uhd8k,
            AspectRatio::Custom,
            FrameRate::Custom,
            Complexity::VeryHigh,
            Decimal::MAX,
            None,
        );
        assert!(matches!(result, Err(PricingError::Overflow)));
    }

    // ==================== currency tests ====================

    #[test]
    fn test_convert_currency_usd_is_identity() {
        assert_eq!(convert_currency(dec!(5500), Currency::Usd).unwrap(), dec!(5500));
        assert_eq!(convert_currency(dec!(1234.5), Currency::Usd).unwrap(), dec!(1235));
    }

    #[test]
    fn test_convert_currency_eur_example() {
        assert_eq!(convert_currency(dec!(5500), Currency::Eur).unwrap(), dec!(5060));
    }

    #[test]
    fn test_convert_currency_jpy() {
        // 350 * 150.25 = 52587.5
        assert_eq!(convert_currency(dec!(350), Currency::Jpy).unwrap(), dec!(52588));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(5500), Currency::Eur).unwrap(), "€5060");
        assert_eq!(format_money(dec!(500), Currency::Usd).unwrap(), "$500");
        assert_eq!(format_money(dec!(100), Currency::Cad).unwrap(), "C$136");
    }

    // ==================== additional factor tests ====================

    #[test]
    fn test_apply_additional_factors_is_unrounded() {
        let price = apply_additional_factors(
            dec!(5500),
            &[AdditionalFactor::Photorealistic, AdditionalFactor::RushJob],
        )
        .unwrap();
        assert_eq!(price, dec!(14025));

        let price = apply_additional_factors(dec!(827), &[AdditionalFactor::Stylized]).unwrap();
        assert_eq!(price, dec!(992.4));
    }

    #[test]
    fn test_apply_no_factors_is_identity() {
        assert_eq!(apply_additional_factors(dec!(42), &[]).unwrap(), dec!(42));
    }
}

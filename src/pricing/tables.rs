//! Static multiplier tables.
//!
//! Every table is a closed enum: the set of keys is fixed at compile time and
//! each key maps to a positive multiplier. `ALL` lists keys in display order.
//! Parsing only accepts the exact display key.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::services::PricingError;

fn invalid(parameter: &str, value: &str) -> PricingError {
    PricingError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}

/// Kind of service being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceType {
    #[serde(rename = "stillFrame")]
    StillFrame,
    #[serde(rename = "animation")]
    Animation,
    #[serde(rename = "cgi")]
    Cgi,
    #[serde(rename = "vfx")]
    Vfx,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::StillFrame,
        ServiceType::Animation,
        ServiceType::Cgi,
        ServiceType::Vfx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::StillFrame => "stillFrame",
            ServiceType::Animation => "animation",
            ServiceType::Cgi => "cgi",
            ServiceType::Vfx => "vfx",
        }
    }

    /// Base price in USD. Animation is priced per second.
    pub fn base_rate(&self) -> Decimal {
        match self {
            ServiceType::StillFrame => dec!(350),
            ServiceType::Animation => dec!(150),
            ServiceType::Cgi => dec!(500),
            ServiceType::Vfx => dec!(750),
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stillFrame" => Ok(ServiceType::StillFrame),
            "animation" => Ok(ServiceType::Animation),
            "cgi" => Ok(ServiceType::Cgi),
            "vfx" => Ok(ServiceType::Vfx),
            _ => Err(invalid("serviceType", s)),
        }
    }
}

/// Output resolution tier. Higher tiers take longer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "2K")]
    Qhd2k,
    #[serde(rename = "4K")]
    Uhd4k,
    #[serde(rename = "8K")]
    Uhd8k,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::Hd720,
        Resolution::Hd1080,
        Resolution::Qhd2k,
        Resolution::Uhd4k,
        Resolution::Uhd8k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Hd720 => "720p",
            Resolution::Hd1080 => "1080p",
            Resolution::Qhd2k => "2K",
            Resolution::Uhd4k => "4K",
            Resolution::Uhd8k => "8K",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Resolution::Hd720 => dec!(0.6),
            Resolution::Hd1080 => dec!(1.0),
            Resolution::Qhd2k => dec!(1.5),
            Resolution::Uhd4k => dec!(2.2),
            Resolution::Uhd8k => dec!(3.5),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "720p" => Ok(Resolution::Hd720),
            "1080p" => Ok(Resolution::Hd1080),
            "2K" => Ok(Resolution::Qhd2k),
            "4K" => Ok(Resolution::Uhd4k),
            "8K" => Ok(Resolution::Uhd8k),
            _ => Err(invalid("resolution", s)),
        }
    }
}

/// Frame aspect ratio. Wider frames need more scene setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "21:9")]
    Ultrawide,
    #[serde(rename = "Custom")]
    Custom,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Standard,
        AspectRatio::Widescreen,
        AspectRatio::Ultrawide,
        AspectRatio::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Ultrawide => "21:9",
            AspectRatio::Custom => "Custom",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            AspectRatio::Square => dec!(0.9),
            AspectRatio::Standard => dec!(1.0),
            AspectRatio::Widescreen => dec!(1.1),
            AspectRatio::Ultrawide => dec!(1.3),
            AspectRatio::Custom => dec!(1.5),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(AspectRatio::Square),
            "4:3" => Ok(AspectRatio::Standard),
            "16:9" => Ok(AspectRatio::Widescreen),
            "21:9" => Ok(AspectRatio::Ultrawide),
            "Custom" => Ok(AspectRatio::Custom),
            _ => Err(invalid("aspectRatio", s)),
        }
    }
}

/// Frame rate for moving-image work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameRate {
    #[serde(rename = "24")]
    Fps24,
    #[serde(rename = "30")]
    Fps30,
    #[serde(rename = "60")]
    Fps60,
    #[serde(rename = "120")]
    Fps120,
    #[serde(rename = "Custom")]
    Custom,
}

impl FrameRate {
    pub const ALL: [FrameRate; 5] = [
        FrameRate::Fps24,
        FrameRate::Fps30,
        FrameRate::Fps60,
        FrameRate::Fps120,
        FrameRate::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameRate::Fps24 => "24",
            FrameRate::Fps30 => "30",
            FrameRate::Fps60 => "60",
            FrameRate::Fps120 => "120",
            FrameRate::Custom => "Custom",
        }
    }

    /// Table multiplier. `Custom` holds a placeholder used only when no
    /// custom frame rate is supplied.
    pub fn multiplier(&self) -> Decimal {
        match self {
            FrameRate::Fps24 => dec!(1.0),
            FrameRate::Fps30 => dec!(1.25),
            FrameRate::Fps60 => dec!(1.8),
            FrameRate::Fps120 => dec!(2.5),
            FrameRate::Custom => dec!(3.0),
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameRate {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24" => Ok(FrameRate::Fps24),
            "30" => Ok(FrameRate::Fps30),
            "60" => Ok(FrameRate::Fps60),
            "120" => Ok(FrameRate::Fps120),
            "Custom" => Ok(FrameRate::Custom),
            _ => Err(invalid("fps", s)),
        }
    }
}

/// Print resolution for still frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dpi {
    #[serde(rename = "72")]
    Dpi72,
    #[serde(rename = "150")]
    Dpi150,
    #[serde(rename = "300")]
    Dpi300,
    #[serde(rename = "600")]
    Dpi600,
    #[serde(rename = "Custom")]
    Custom,
}

impl Dpi {
    pub const ALL: [Dpi; 5] = [Dpi::Dpi72, Dpi::Dpi150, Dpi::Dpi300, Dpi::Dpi600, Dpi::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dpi::Dpi72 => "72",
            Dpi::Dpi150 => "150",
            Dpi::Dpi300 => "300",
            Dpi::Dpi600 => "600",
            Dpi::Custom => "Custom",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Dpi::Dpi72 => dec!(0.7),
            Dpi::Dpi150 => dec!(1.0),
            Dpi::Dpi300 => dec!(1.4),
            Dpi::Dpi600 => dec!(2.0),
            Dpi::Custom => dec!(2.5),
        }
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dpi {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "72" => Ok(Dpi::Dpi72),
            "150" => Ok(Dpi::Dpi150),
            "300" => Ok(Dpi::Dpi300),
            "600" => Ok(Dpi::Dpi600),
            "Custom" => Ok(Dpi::Custom),
            _ => Err(invalid("dpi", s)),
        }
    }
}

/// Scene complexity: object count, lighting, shading work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Low,
        Complexity::Medium,
        Complexity::High,
        Complexity::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
            Complexity::VeryHigh => "Very High",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Complexity::Low => dec!(0.7),
            Complexity::Medium => dec!(1.0),
            Complexity::High => dec!(1.8),
            Complexity::VeryHigh => dec!(3.0),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Complexity::Low),
            "Medium" => Ok(Complexity::Medium),
            "High" => Ok(Complexity::High),
            "Very High" => Ok(Complexity::VeryHigh),
            _ => Err(invalid("complexity", s)),
        }
    }
}

/// Optional surcharges a client can select on top of the base quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdditionalFactor {
    #[serde(rename = "Character Animation")]
    CharacterAnimation,
    #[serde(rename = "Fluid Simulation")]
    FluidSimulation,
    Photorealistic,
    Stylized,
    #[serde(rename = "Rush Job")]
    RushJob,
}

impl AdditionalFactor {
    pub const ALL: [AdditionalFactor; 5] = [
        AdditionalFactor::CharacterAnimation,
        AdditionalFactor::FluidSimulation,
        AdditionalFactor::Photorealistic,
        AdditionalFactor::Stylized,
        AdditionalFactor::RushJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalFactor::CharacterAnimation => "Character Animation",
            AdditionalFactor::FluidSimulation => "Fluid Simulation",
            AdditionalFactor::Photorealistic => "Photorealistic",
            AdditionalFactor::Stylized => "Stylized",
            AdditionalFactor::RushJob => "Rush Job",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            AdditionalFactor::CharacterAnimation => dec!(1.5),
            AdditionalFactor::FluidSimulation => dec!(1.8),
            AdditionalFactor::Photorealistic => dec!(1.7),
            AdditionalFactor::Stylized => dec!(1.2),
            AdditionalFactor::RushJob => dec!(1.5),
        }
    }
}

impl fmt::Display for AdditionalFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdditionalFactor {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Character Animation" => Ok(AdditionalFactor::CharacterAnimation),
            "Fluid Simulation" => Ok(AdditionalFactor::FluidSimulation),
            "Photorealistic" => Ok(AdditionalFactor::Photorealistic),
            "Stylized" => Ok(AdditionalFactor::Stylized),
            "Rush Job" => Ok(AdditionalFactor::RushJob),
            _ => Err(invalid("additionalFactors", s)),
        }
    }
}

/// Display currency. Rates are fixed and expressed per 1 USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "JPY")]
    Jpy,
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "AUD")]
    Aud,
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cad,
        Currency::Aud,
        Currency::Inr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Inr => "₹",
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Usd => dec!(1.0),
            Currency::Eur => dec!(0.92),
            Currency::Gbp => dec!(0.79),
            Currency::Jpy => dec!(150.25),
            Currency::Cad => dec!(1.36),
            Currency::Aud => dec!(1.52),
            Currency::Inr => dec!(83.5),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Inr => "Indian Rupee",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| invalid("currency", s))
    }
}

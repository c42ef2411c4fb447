//! Pricing engine module.
//!
//! Static multiplier tables and pure price calculations for still frames,
//! animation, CGI and VFX work, plus the HTTP routes that expose them.

pub mod breakdown;
pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tables;

// Re-export commonly used items
pub use breakdown::{get_price_breakdown, BreakdownLine, BreakdownParams};
pub use calculators::{
    calculate_animation_price, calculate_cgi_price, calculate_still_frame_price,
    calculate_vfx_price, convert_currency, round_whole,
};
pub use routes::router;
pub use services::{calculate_quote, quote, PricingError, Quote, QuoteInput};
pub use tables::{
    AdditionalFactor, AspectRatio, Complexity, Currency, Dpi, FrameRate, Resolution, ServiceType,
};

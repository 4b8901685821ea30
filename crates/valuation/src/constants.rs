//! Named policy constants for the valuation core.
//!
//! Every numeric knob of the calculator and the assumption suggester lives
//! here so the policy can be audited and tested apart from the arithmetic.

/// Default expected annual FCF growth rate (5%).
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;

/// Default perpetual growth rate beyond the projection horizon (2.5%).
pub const DEFAULT_TERMINAL_GROWTH: f64 = 0.025;

/// Default discount rate / WACC proxy (10%).
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.10;

/// Default number of explicitly projected years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Hard ceiling on the explicit projection horizon.
pub const MAX_PROJECTION_YEARS: u32 = 15;

/// Margin of safety (percent) above which a stock is rated Strong Buy.
pub const STRONG_BUY_MARGIN: f64 = 20.0;

/// Margin of safety above which a stock is rated Buy.
pub const BUY_MARGIN: f64 = 10.0;

/// Margin of safety above which a stock is rated Hold.
pub const HOLD_MARGIN: f64 = -10.0;

/// Margin of safety above which a stock is rated Sell; at or below,
/// Strong Sell.
pub const SELL_MARGIN: f64 = -20.0;

/// Suggested terminal growth is clamped to this band, below typical
/// long-run GDP growth.
pub const TERMINAL_GROWTH_FLOOR: f64 = 0.02;
pub const TERMINAL_GROWTH_CEILING: f64 = 0.03;

/// Suggested discount rates are clamped to this band.
pub const DISCOUNT_RATE_FLOOR: f64 = 0.08;
pub const DISCOUNT_RATE_CEILING: f64 = 0.14;

/// Minimum gap kept between suggested terminal growth and discount rate
/// so the perpetuity denominator stays comfortably positive.
pub const TERMINAL_GROWTH_GAP: f64 = 0.02;

/// Decimal places for currency amounts at the display boundary.
pub const DISPLAY_CURRENCY_PRECISION: u32 = 2;

/// Decimal places for discount factors at the display boundary.
pub const DISPLAY_FACTOR_PRECISION: u32 = 4;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISCOUNT_RATE, DEFAULT_GROWTH_RATE, DEFAULT_PROJECTION_YEARS,
    DEFAULT_TERMINAL_GROWTH, MAX_PROJECTION_YEARS,
};
use crate::errors::{Result, ValuationError};

// ============================================================================
// Input Models
// ============================================================================

/// The assumption set a DCF run is parameterized by.
///
/// Rates are decimal fractions (0.05 = 5%). Immutable once handed to the
/// calculator; every calculation call is a fresh, independent evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationAssumptions {
    pub growth_rate: f64,
    pub terminal_growth: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            growth_rate: DEFAULT_GROWTH_RATE,
            terminal_growth: DEFAULT_TERMINAL_GROWTH,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

impl ValuationAssumptions {
    pub fn validate(&self) -> Result<()> {
        if !self.growth_rate.is_finite()
            || !self.terminal_growth.is_finite()
            || !self.discount_rate.is_finite()
        {
            return Err(ValuationError::InvalidAssumptions(
                "Rates must be finite numbers".to_string(),
            ));
        }
        if self.projection_years < 1 {
            return Err(ValuationError::InvalidAssumptions(
                "Projection horizon must be at least one year".to_string(),
            ));
        }
        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(ValuationError::InvalidAssumptions(format!(
                "Projection horizon must not exceed {} years",
                MAX_PROJECTION_YEARS
            )));
        }
        // The perpetuity formula divides by (discount_rate - terminal_growth);
        // the gap must be strictly positive.
        if self.terminal_growth >= self.discount_rate {
            return Err(ValuationError::InvalidAssumptions(format!(
                "Terminal growth ({}) must be strictly below the discount rate ({})",
                self.terminal_growth, self.discount_rate
            )));
        }
        Ok(())
    }
}

/// Read-only market snapshot for the company being valued.
///
/// `current_fcf` may be negative for a cash-burning business; the
/// calculator propagates that rather than masking it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFinancials {
    pub ticker: String,
    pub company_name: String,
    pub current_price: f64,
    pub current_fcf: f64,
    pub shares_outstanding: f64,
}

impl CompanyFinancials {
    pub fn validate(&self) -> Result<()> {
        if !self.shares_outstanding.is_finite() || self.shares_outstanding <= 0.0 {
            return Err(ValuationError::InvalidInput(
                "Shares outstanding must be positive".to_string(),
            ));
        }
        // A zero price would turn the margin-of-safety division into
        // Infinity/NaN, so reject it up front.
        if !self.current_price.is_finite() || self.current_price <= 0.0 {
            return Err(ValuationError::InvalidInput(
                "Current price must be positive".to_string(),
            ));
        }
        if !self.current_fcf.is_finite() {
            return Err(ValuationError::InvalidInput(
                "Current free cash flow must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Result Models
// ============================================================================

/// One explicitly projected year. Reports carry these in chronological
/// order, indexed by `year` starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub year: u32,
    pub cash_flow: f64,
    pub present_value: f64,
    pub discount_factor: f64,
}

/// Gordon-growth terminal value at the end of the projection horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalValue {
    /// Undiscounted value at the end of year N.
    pub value: f64,
    /// Discounted back to year 0 using the Nth-year factor.
    pub present_value: f64,
    /// Echo of the terminal growth rate used.
    pub growth_rate: f64,
}

/// Aggregated valuation figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub sum_pv_cash_flows: f64,
    pub terminal_pv: f64,
    pub enterprise_value: f64,
    pub intrinsic_value_per_share: f64,
    pub current_price: f64,
    /// Percentage gap between intrinsic value and market price.
    pub margin_of_safety: f64,
}

/// Categorical read on the margin of safety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rating: String,
    /// Severity tag for UI treatment: "green", "yellow" or "red".
    pub color: String,
    pub message: String,
}

/// Echo of the inputs a report was computed from, as served to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAssumptions {
    pub growth_rate: f64,
    pub terminal_growth: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
    pub current_fcf: f64,
    pub shares_outstanding: f64,
}

/// Complete output of one DCF run. Value object, created fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfReport {
    pub ticker: String,
    pub company_name: String,
    pub current_price: f64,
    pub assumptions: ReportAssumptions,
    pub projections: Vec<CashFlowProjection>,
    pub terminal_value: TerminalValue,
    pub valuation: ValuationSummary,
    pub recommendation: Recommendation,
}

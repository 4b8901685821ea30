use log::debug;

use crate::constants::{BUY_MARGIN, HOLD_MARGIN, SELL_MARGIN, STRONG_BUY_MARGIN};
use crate::dcf::dcf_model::{
    CashFlowProjection, CompanyFinancials, DcfReport, Recommendation, ReportAssumptions,
    TerminalValue, ValuationAssumptions, ValuationSummary,
};
use crate::errors::{Result, ValuationError};

/// Runs a full DCF valuation for one company snapshot.
///
/// Projects free cash flows over the explicit horizon, discounts them to
/// present value, adds a Gordon-growth terminal value, and classifies the
/// resulting margin of safety. Pure function: no state, no I/O, identical
/// inputs always yield identical output.
///
/// # Arguments
///
/// * `financials` - Current market snapshot of the company.
/// * `assumptions` - Growth, terminal growth, discount rate and horizon.
///
pub fn calculate_valuation(
    financials: &CompanyFinancials,
    assumptions: &ValuationAssumptions,
) -> Result<DcfReport> {
    assumptions.validate()?;
    financials.validate()?;

    debug!(
        "Calculating DCF for {} over {} years (growth {}, discount {})",
        financials.ticker,
        assumptions.projection_years,
        assumptions.growth_rate,
        assumptions.discount_rate
    );

    let projections = project_cash_flows(financials.current_fcf, assumptions);
    let final_year = projections.last().copied().ok_or_else(|| {
        ValuationError::InvalidAssumptions("Projection horizon is empty".to_string())
    })?;

    let sum_pv_cash_flows: f64 = projections.iter().map(|p| p.present_value).sum();

    let terminal_value = calculate_terminal_value(&final_year, assumptions);

    let enterprise_value = sum_pv_cash_flows + terminal_value.present_value;
    let intrinsic_value_per_share = enterprise_value / financials.shares_outstanding;
    let margin_of_safety =
        (intrinsic_value_per_share - financials.current_price) / financials.current_price * 100.0;

    let recommendation = classify_margin(margin_of_safety);

    Ok(DcfReport {
        ticker: financials.ticker.clone(),
        company_name: financials.company_name.clone(),
        current_price: financials.current_price,
        assumptions: ReportAssumptions {
            growth_rate: assumptions.growth_rate,
            terminal_growth: assumptions.terminal_growth,
            discount_rate: assumptions.discount_rate,
            projection_years: assumptions.projection_years,
            current_fcf: financials.current_fcf,
            shares_outstanding: financials.shares_outstanding,
        },
        projections,
        terminal_value,
        valuation: ValuationSummary {
            sum_pv_cash_flows,
            terminal_pv: terminal_value.present_value,
            enterprise_value,
            intrinsic_value_per_share,
            current_price: financials.current_price,
            margin_of_safety,
        },
        recommendation,
    })
}

/// Projects cash flows for years 1..=N.
///
/// Each year's cash flow is compounded from the base FCF, not from the
/// previous year's value, so no rounding or floating-point drift
/// accumulates across the loop.
fn project_cash_flows(
    base_fcf: f64,
    assumptions: &ValuationAssumptions,
) -> Vec<CashFlowProjection> {
    (1..=assumptions.projection_years)
        .map(|year| {
            let cash_flow = base_fcf * (1.0 + assumptions.growth_rate).powi(year as i32);
            let discount_factor = 1.0 / (1.0 + assumptions.discount_rate).powi(year as i32);
            CashFlowProjection {
                year,
                cash_flow,
                present_value: cash_flow * discount_factor,
                discount_factor,
            }
        })
        .collect()
}

/// Gordon-growth perpetuity on the final projected year, discounted with
/// the same Nth-year factor as the last explicit cash flow. The divisor
/// is strictly positive because `validate()` already rejected
/// `terminal_growth >= discount_rate`.
fn calculate_terminal_value(
    final_year: &CashFlowProjection,
    assumptions: &ValuationAssumptions,
) -> TerminalValue {
    let value = final_year.cash_flow * (1.0 + assumptions.terminal_growth)
        / (assumptions.discount_rate - assumptions.terminal_growth);
    TerminalValue {
        value,
        present_value: value * final_year.discount_factor,
        growth_rate: assumptions.terminal_growth,
    }
}

/// Maps a margin-of-safety percentage onto the five-tier rating ladder.
///
/// Thresholds are the named constants in [`crate::constants`]; the ladder
/// and message wording match the public API contract.
pub fn classify_margin(margin_of_safety: f64) -> Recommendation {
    let (rating, color, message) = if margin_of_safety > STRONG_BUY_MARGIN {
        (
            "Strong Buy",
            "green",
            format!(
                "Stock appears undervalued by {:.1}%. Consider buying.",
                margin_of_safety.abs()
            ),
        )
    } else if margin_of_safety > BUY_MARGIN {
        (
            "Buy",
            "green",
            format!("Stock appears undervalued by {:.1}%.", margin_of_safety.abs()),
        )
    } else if margin_of_safety > HOLD_MARGIN {
        (
            "Hold",
            "yellow",
            "Stock is fairly valued. Hold current position.".to_string(),
        )
    } else if margin_of_safety > SELL_MARGIN {
        (
            "Sell",
            "red",
            format!("Stock appears overvalued by {:.1}%.", margin_of_safety.abs()),
        )
    } else {
        (
            "Strong Sell",
            "red",
            format!(
                "Stock appears significantly overvalued by {:.1}%.",
                margin_of_safety.abs()
            ),
        )
    };

    Recommendation {
        rating: rating.to_string(),
        color: color.to_string(),
        message,
    }
}

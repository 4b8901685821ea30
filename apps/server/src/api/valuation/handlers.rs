use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::warn;

use northcreek_market_data::{CompanyProfile, Quote};
use northcreek_valuation::{
    calculate_valuation, suggest_assumptions, CompanyFinancials, SizeCategory,
    ValuationAssumptions,
};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

use super::dto::{CalculateQuery, DcfResponse, SuggestionsResponse};

/// Conservative FCF estimate when the provider reports none: 5% of market
/// cap (an FCF-yield proxy).
const FCF_YIELD_ESTIMATE: f64 = 0.05;

/// Fixed fallback share count when neither shares nor market cap are known.
const FALLBACK_SHARES_OUTSTANDING: f64 = 1_000_000.0;

// Accepted query ranges, mirroring the public API contract.
const GROWTH_RATE_RANGE: (f64, f64) = (-0.5, 1.0);
const TERMINAL_GROWTH_RANGE: (f64, f64) = (0.0, 0.10);
const DISCOUNT_RATE_RANGE: (f64, f64) = (0.01, 0.30);
const PROJECTION_YEARS_RANGE: (u32, u32) = (3, 10);

/// GET /dcf/calculate/{ticker}
///
/// Fetches the company's current market snapshot, applies the requested
/// (or default) assumptions, and returns the full valuation report.
pub async fn calculate_dcf(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<Json<DcfResponse>> {
    let ticker = ticker.trim().to_uppercase();
    let defaults = ValuationAssumptions::default();
    let assumptions = ValuationAssumptions {
        growth_rate: query.growth_rate.unwrap_or(defaults.growth_rate),
        terminal_growth: query.terminal_growth.unwrap_or(defaults.terminal_growth),
        discount_rate: query.discount_rate.unwrap_or(defaults.discount_rate),
        projection_years: query.projection_years.unwrap_or(defaults.projection_years),
    };
    validate_query_ranges(&assumptions)?;

    let quote = state.market_data.get_quote(&ticker).await?;

    // A missing profile degrades to estimates; a missing quote is fatal.
    let profile = match state.market_data.get_profile(&ticker).await {
        Ok(profile) => profile,
        Err(err) => {
            warn!("Profile unavailable for {}: {}", ticker, err);
            CompanyProfile::new(&ticker)
        }
    };

    let financials = build_financials(&ticker, &quote, &profile);
    let report = calculate_valuation(&financials, &assumptions)?;
    Ok(Json(DcfResponse::from(report)))
}

/// GET /dcf/suggestions/{ticker}
///
/// Classifies the company by sector and size and returns a suggested
/// assumption set with per-field rationale.
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> ApiResult<Json<SuggestionsResponse>> {
    let ticker = ticker.trim().to_uppercase();
    let profile = state.market_data.get_profile(&ticker).await?;

    // Price is context for the rationale text only; degrade to zero.
    let current_price = match state.market_data.get_quote(&ticker).await {
        Ok(quote) => quote.price,
        Err(err) => {
            warn!("Quote unavailable for {}: {}", ticker, err);
            0.0
        }
    };

    let sector = profile.normalized_sector().unwrap_or("Unknown").to_string();
    let industry = profile.industry.clone().unwrap_or_else(|| "Unknown".to_string());
    let market_cap = profile.market_cap.unwrap_or(0.0);
    let size_category = SizeCategory::from_market_cap(market_cap);

    let suggested = suggest_assumptions(&sector, &industry, size_category, current_price, market_cap);

    let company_name = profile.name.clone().unwrap_or_else(|| ticker.clone());
    Ok(Json(SuggestionsResponse::new(
        ticker,
        company_name,
        sector,
        industry,
        current_price,
        market_cap,
        size_category,
        suggested,
    )))
}

/// Builds the valuation input snapshot, preferring provider-reported
/// fundamentals and falling back to market-cap estimates.
fn build_financials(ticker: &str, quote: &Quote, profile: &CompanyProfile) -> CompanyFinancials {
    let current_price = quote.price;
    let market_cap = profile.market_cap.filter(|cap| *cap > 0.0);

    let current_fcf = profile.free_cash_flow.unwrap_or_else(|| match market_cap {
        Some(cap) => cap * FCF_YIELD_ESTIMATE,
        None => current_price * FALLBACK_SHARES_OUTSTANDING,
    });

    let shares_outstanding = profile
        .shares_outstanding
        .filter(|shares| *shares > 0.0)
        .or_else(|| {
            market_cap.and_then(|cap| {
                if current_price > 0.0 {
                    Some(cap / current_price)
                } else {
                    None
                }
            })
        })
        .unwrap_or(FALLBACK_SHARES_OUTSTANDING);

    CompanyFinancials {
        ticker: ticker.to_string(),
        company_name: profile.name.clone().unwrap_or_else(|| ticker.to_string()),
        current_price,
        current_fcf,
        shares_outstanding,
    }
}

fn validate_query_ranges(assumptions: &ValuationAssumptions) -> Result<(), ApiError> {
    range_check("growth_rate", assumptions.growth_rate, GROWTH_RATE_RANGE)?;
    range_check(
        "terminal_growth",
        assumptions.terminal_growth,
        TERMINAL_GROWTH_RANGE,
    )?;
    range_check("discount_rate", assumptions.discount_rate, DISCOUNT_RATE_RANGE)?;

    let (min_years, max_years) = PROJECTION_YEARS_RANGE;
    if assumptions.projection_years < min_years || assumptions.projection_years > max_years {
        return Err(ApiError::BadRequest(format!(
            "projection_years must be between {} and {}",
            min_years, max_years
        )));
    }
    Ok(())
}

fn range_check(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ApiError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ApiError::BadRequest(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn quote(price: f64) -> Quote {
        Quote {
            symbol: "ACME".to_string(),
            price,
            currency: "USD".to_string(),
            timestamp: Utc::now(),
            source: "TEST".to_string(),
        }
    }

    #[test]
    fn build_financials_prefers_reported_fundamentals() {
        let profile = CompanyProfile {
            symbol: "ACME".to_string(),
            name: Some("Acme Corp".to_string()),
            market_cap: Some(1e9),
            shares_outstanding: Some(2e7),
            free_cash_flow: Some(5e7),
            ..Default::default()
        };
        let financials = build_financials("ACME", &quote(50.0), &profile);
        assert_eq!(financials.company_name, "Acme Corp");
        assert_eq!(financials.current_fcf, 5e7);
        assert_eq!(financials.shares_outstanding, 2e7);
    }

    #[test]
    fn build_financials_estimates_from_market_cap() {
        let profile = CompanyProfile {
            symbol: "ACME".to_string(),
            market_cap: Some(1e9),
            ..Default::default()
        };
        let financials = build_financials("ACME", &quote(50.0), &profile);
        // 5% of market cap; shares from cap / price
        assert_eq!(financials.current_fcf, 5e7);
        assert_eq!(financials.shares_outstanding, 2e7);
        assert_eq!(financials.company_name, "ACME");
    }

    #[test]
    fn build_financials_uses_fixed_fallbacks_without_market_cap() {
        let profile = CompanyProfile::new("ACME");
        let financials = build_financials("ACME", &quote(50.0), &profile);
        assert_eq!(financials.shares_outstanding, FALLBACK_SHARES_OUTSTANDING);
        assert_eq!(
            financials.current_fcf,
            50.0 * FALLBACK_SHARES_OUTSTANDING
        );
    }

    #[test]
    fn query_ranges_are_enforced() {
        let defaults = ValuationAssumptions::default();
        assert!(validate_query_ranges(&defaults).is_ok());

        let too_fast = ValuationAssumptions {
            growth_rate: 1.5,
            ..defaults
        };
        assert!(validate_query_ranges(&too_fast).is_err());

        let too_long = ValuationAssumptions {
            projection_years: 12,
            ..defaults
        };
        assert!(validate_query_ranges(&too_long).is_err());
    }
}

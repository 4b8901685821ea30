use serde::{Deserialize, Serialize};

use northcreek_valuation::constants::{DISPLAY_CURRENCY_PRECISION, DISPLAY_FACTOR_PRECISION};
use northcreek_valuation::{
    AssumptionReasoning, DcfReport, Recommendation, SizeCategory, SuggestedAssumptions,
};

/// Query parameters for the calculate endpoint. Rates are decimal
/// fractions (0.05 = 5%); omitted fields fall back to the core defaults.
#[derive(Debug, Deserialize)]
pub struct CalculateQuery {
    pub growth_rate: Option<f64>,
    pub terminal_growth: Option<f64>,
    pub discount_rate: Option<f64>,
    pub projection_years: Option<u32>,
}

// ============================================================================
// Calculate response
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AssumptionsDto {
    pub growth_rate: f64,
    pub terminal_growth: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
    pub current_fcf: f64,
    pub shares_outstanding: f64,
}

#[derive(Debug, Serialize)]
pub struct ProjectionDto {
    pub year: u32,
    pub cash_flow: f64,
    pub present_value: f64,
    pub discount_factor: f64,
}

#[derive(Debug, Serialize)]
pub struct TerminalValueDto {
    pub value: f64,
    pub present_value: f64,
    pub growth_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct ValuationDto {
    pub sum_pv_cash_flows: f64,
    pub terminal_pv: f64,
    pub enterprise_value: f64,
    pub intrinsic_value_per_share: f64,
    pub current_price: f64,
    pub margin_of_safety: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationDto {
    pub rating: String,
    pub color: String,
    pub message: String,
}

/// Wire shape of a DCF valuation. Field names are part of the public API
/// contract and must not drift.
#[derive(Debug, Serialize)]
pub struct DcfResponse {
    pub ticker: String,
    pub company_name: String,
    pub current_price: f64,
    pub assumptions: AssumptionsDto,
    pub projections: Vec<ProjectionDto>,
    pub terminal_value: TerminalValueDto,
    pub valuation: ValuationDto,
    pub recommendation: RecommendationDto,
}

impl From<DcfReport> for DcfResponse {
    /// Rounds for display only here at the wire boundary; the core report
    /// keeps full precision through every aggregation step.
    fn from(report: DcfReport) -> Self {
        let currency = |v: f64| round_to(v, DISPLAY_CURRENCY_PRECISION);
        let factor = |v: f64| round_to(v, DISPLAY_FACTOR_PRECISION);

        Self {
            ticker: report.ticker,
            company_name: report.company_name,
            current_price: currency(report.current_price),
            assumptions: AssumptionsDto {
                growth_rate: report.assumptions.growth_rate,
                terminal_growth: report.assumptions.terminal_growth,
                discount_rate: report.assumptions.discount_rate,
                projection_years: report.assumptions.projection_years,
                current_fcf: currency(report.assumptions.current_fcf),
                shares_outstanding: round_to(report.assumptions.shares_outstanding, 0),
            },
            projections: report
                .projections
                .iter()
                .map(|p| ProjectionDto {
                    year: p.year,
                    cash_flow: currency(p.cash_flow),
                    present_value: currency(p.present_value),
                    discount_factor: factor(p.discount_factor),
                })
                .collect(),
            terminal_value: TerminalValueDto {
                value: currency(report.terminal_value.value),
                present_value: currency(report.terminal_value.present_value),
                growth_rate: report.terminal_value.growth_rate,
            },
            valuation: ValuationDto {
                sum_pv_cash_flows: currency(report.valuation.sum_pv_cash_flows),
                terminal_pv: currency(report.valuation.terminal_pv),
                enterprise_value: currency(report.valuation.enterprise_value),
                intrinsic_value_per_share: currency(report.valuation.intrinsic_value_per_share),
                current_price: currency(report.valuation.current_price),
                margin_of_safety: currency(report.valuation.margin_of_safety),
            },
            recommendation: RecommendationDto::from(report.recommendation),
        }
    }
}

impl From<Recommendation> for RecommendationDto {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            rating: recommendation.rating,
            color: recommendation.color,
            message: recommendation.message,
        }
    }
}

// ============================================================================
// Suggestions response
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SuggestionFieldsDto {
    pub growth_rate: f64,
    pub terminal_growth: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
}

/// Wire shape of the assumption-suggestion companion endpoint.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub industry: String,
    pub current_price: f64,
    pub market_cap: f64,
    /// Size bucket token ("mid_cap" etc.), or "unknown" when the market
    /// cap could not be classified. Never null.
    pub size_category: String,
    pub suggestions: SuggestionFieldsDto,
    pub reasoning: AssumptionReasoning,
}

impl SuggestionsResponse {
    pub fn new(
        ticker: String,
        company_name: String,
        sector: String,
        industry: String,
        current_price: f64,
        market_cap: f64,
        size_category: Option<SizeCategory>,
        suggested: SuggestedAssumptions,
    ) -> Self {
        Self {
            ticker,
            company_name,
            sector,
            industry,
            current_price: round_to(current_price, DISPLAY_CURRENCY_PRECISION),
            market_cap: round_to(market_cap, DISPLAY_CURRENCY_PRECISION),
            size_category: size_category
                .as_ref()
                .map_or("unknown", SizeCategory::as_str)
                .to_string(),
            suggestions: SuggestionFieldsDto {
                growth_rate: suggested.assumptions.growth_rate,
                terminal_growth: suggested.assumptions.terminal_growth,
                discount_rate: suggested.assumptions.discount_rate,
                projection_years: suggested.assumptions.projection_years,
            },
            reasoning: suggested.reasoning,
        }
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

//! Maps a company's sector and size onto a suggested assumption set.
//!
//! The policy is a flat, inspectable table (one [`SectorProfile`] row per
//! sector) plus a small size adjustment, never scattered branches. Unknown
//! sectors degrade to a conservative default band rather than failing -
//! suggestions are advisory and never load-bearing for the calculator.

use log::debug;

use crate::constants::{
    DEFAULT_DISCOUNT_RATE, DEFAULT_GROWTH_RATE, DEFAULT_PROJECTION_YEARS,
    DEFAULT_TERMINAL_GROWTH, DISCOUNT_RATE_CEILING, DISCOUNT_RATE_FLOOR, TERMINAL_GROWTH_CEILING,
    TERMINAL_GROWTH_FLOOR, TERMINAL_GROWTH_GAP,
};
use crate::dcf::ValuationAssumptions;
use crate::suggestions::suggestions_model::{
    AssumptionReasoning, SectorProfile, SizeCategory, SuggestedAssumptions,
};

/// Baseline assumptions per sector, keyed on the provider sector
/// vocabulary (Yahoo-style names plus known aliases).
const SECTOR_PROFILES: &[SectorProfile] = &[
    SectorProfile {
        sector: "Technology",
        aliases: &["information technology"],
        growth_rate: 0.12,
        terminal_growth: 0.03,
        discount_rate: 0.11,
        projection_years: 5,
        character: "high-growth",
    },
    SectorProfile {
        sector: "Communication Services",
        aliases: &["communications", "telecommunication services"],
        growth_rate: 0.08,
        terminal_growth: 0.025,
        discount_rate: 0.105,
        projection_years: 5,
        character: "platform-driven",
    },
    SectorProfile {
        sector: "Healthcare",
        aliases: &["health care"],
        growth_rate: 0.08,
        terminal_growth: 0.025,
        discount_rate: 0.095,
        projection_years: 7,
        character: "defensive-growth",
    },
    SectorProfile {
        sector: "Financial Services",
        aliases: &["financials", "financial"],
        growth_rate: 0.06,
        terminal_growth: 0.025,
        discount_rate: 0.10,
        projection_years: 5,
        character: "rate-sensitive",
    },
    SectorProfile {
        sector: "Consumer Cyclical",
        aliases: &["consumer discretionary"],
        growth_rate: 0.07,
        terminal_growth: 0.025,
        discount_rate: 0.11,
        projection_years: 4,
        character: "cyclical",
    },
    SectorProfile {
        sector: "Consumer Defensive",
        aliases: &["consumer staples"],
        growth_rate: 0.04,
        terminal_growth: 0.02,
        discount_rate: 0.085,
        projection_years: 7,
        character: "stable",
    },
    SectorProfile {
        sector: "Industrials",
        aliases: &[],
        growth_rate: 0.06,
        terminal_growth: 0.025,
        discount_rate: 0.10,
        projection_years: 5,
        character: "capital-intensive",
    },
    SectorProfile {
        sector: "Energy",
        aliases: &["oil & gas"],
        growth_rate: 0.04,
        terminal_growth: 0.02,
        discount_rate: 0.115,
        projection_years: 4,
        character: "commodity-cyclical",
    },
    SectorProfile {
        sector: "Utilities",
        aliases: &[],
        growth_rate: 0.04,
        terminal_growth: 0.02,
        discount_rate: 0.085,
        projection_years: 7,
        character: "regulated",
    },
    SectorProfile {
        sector: "Real Estate",
        aliases: &["reit"],
        growth_rate: 0.05,
        terminal_growth: 0.02,
        discount_rate: 0.095,
        projection_years: 5,
        character: "income-oriented",
    },
    SectorProfile {
        sector: "Materials",
        aliases: &["basic materials"],
        growth_rate: 0.05,
        terminal_growth: 0.02,
        discount_rate: 0.11,
        projection_years: 4,
        character: "commodity-cyclical",
    },
];

/// Additive adjustments by size bucket: smaller companies get a higher
/// growth band and a higher required return.
fn size_adjustment(size: SizeCategory) -> (f64, f64) {
    match size {
        SizeCategory::MicroCap => (0.02, 0.015),
        SizeCategory::SmallCap => (0.01, 0.01),
        SizeCategory::MidCap => (0.0, 0.0),
        SizeCategory::LargeCap => (-0.005, -0.005),
        SizeCategory::MegaCap => (-0.01, -0.01),
    }
}

fn lookup_sector(sector: &str) -> Option<&'static SectorProfile> {
    let normalized = sector.trim().to_lowercase();
    if normalized.is_empty() || normalized == "unknown" {
        return None;
    }
    SECTOR_PROFILES.iter().find(|profile| {
        profile.sector.to_lowercase() == normalized
            || profile.aliases.iter().any(|alias| *alias == normalized)
    })
}

/// Suggests a full assumption set for a company.
///
/// `sector`/`industry` are free-text provider classifications; `size` is
/// the market-cap bucket when known. `current_price` and `market_cap`
/// only refine the rationale text, never the numeric policy.
pub fn suggest_assumptions(
    sector: &str,
    industry: &str,
    size: Option<SizeCategory>,
    current_price: f64,
    market_cap: f64,
) -> SuggestedAssumptions {
    match lookup_sector(sector) {
        Some(profile) => {
            suggest_from_profile(profile, industry, size, current_price, market_cap)
        }
        None => {
            debug!("No assumption profile for sector '{}', using defaults", sector);
            default_suggestions()
        }
    }
}

fn suggest_from_profile(
    profile: &SectorProfile,
    industry: &str,
    size: Option<SizeCategory>,
    current_price: f64,
    market_cap: f64,
) -> SuggestedAssumptions {
    let (growth_delta, discount_delta) = size.map(size_adjustment).unwrap_or((0.0, 0.0));

    let growth_rate = profile.growth_rate + growth_delta;
    let discount_rate = (profile.discount_rate + discount_delta)
        .clamp(DISCOUNT_RATE_FLOOR, DISCOUNT_RATE_CEILING);
    let terminal_growth = profile
        .terminal_growth
        .clamp(TERMINAL_GROWTH_FLOOR, TERMINAL_GROWTH_CEILING)
        .min(discount_rate - TERMINAL_GROWTH_GAP);

    let size_note = match size {
        Some(size) => format!(" for a {} company", size.label()),
        None => String::new(),
    };
    let industry_note = if industry.trim().is_empty() || industry.trim() == "Unknown" {
        String::new()
    } else {
        format!(" ({})", industry.trim())
    };
    let context_note = if market_cap > 0.0 && current_price > 0.0 {
        format!(
            " at a ${:.1}B market cap and ${:.2} share price",
            market_cap / 1e9,
            current_price
        )
    } else {
        String::new()
    };

    let reasoning = AssumptionReasoning {
        growth_rate: format!(
            "{:.1}% annual FCF growth fits the {} {} sector{}{}.",
            growth_rate * 100.0,
            profile.character,
            profile.sector,
            industry_note,
            size_note,
        ),
        terminal_growth: format!(
            "{:.1}% terminal growth stays below long-run GDP growth, the ceiling for a perpetuity.",
            terminal_growth * 100.0,
        ),
        discount_rate: format!(
            "{:.1}% discount rate reflects the required return on {} {} businesses{}.",
            discount_rate * 100.0,
            profile.character,
            profile.sector,
            context_note,
        ),
        projection_years: format!(
            "A {}-year explicit horizon matches the cash flow visibility of {} businesses.",
            profile.projection_years, profile.character,
        ),
    };

    SuggestedAssumptions {
        assumptions: ValuationAssumptions {
            growth_rate,
            terminal_growth,
            discount_rate,
            projection_years: profile.projection_years,
        },
        reasoning,
        used_defaults: false,
    }
}

/// Conservative band used when the sector cannot be classified.
fn default_suggestions() -> SuggestedAssumptions {
    SuggestedAssumptions {
        assumptions: ValuationAssumptions {
            growth_rate: DEFAULT_GROWTH_RATE,
            terminal_growth: DEFAULT_TERMINAL_GROWTH,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            projection_years: DEFAULT_PROJECTION_YEARS,
        },
        reasoning: AssumptionReasoning {
            growth_rate: format!(
                "Sector unknown; {:.1}% is a moderate growth assumption for an unclassified company.",
                DEFAULT_GROWTH_RATE * 100.0
            ),
            terminal_growth: format!(
                "{:.1}% terminal growth stays below long-run GDP growth, the ceiling for a perpetuity.",
                DEFAULT_TERMINAL_GROWTH * 100.0
            ),
            discount_rate: format!(
                "{:.1}% is the standard required return used when the risk profile is unknown.",
                DEFAULT_DISCOUNT_RATE * 100.0
            ),
            projection_years: format!(
                "A standard {}-year horizon is used when the business profile is unknown.",
                DEFAULT_PROJECTION_YEARS
            ),
        },
        used_defaults: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SIZES: &[Option<SizeCategory>] = &[
        None,
        Some(SizeCategory::MicroCap),
        Some(SizeCategory::SmallCap),
        Some(SizeCategory::MidCap),
        Some(SizeCategory::LargeCap),
        Some(SizeCategory::MegaCap),
    ];

    #[test]
    fn technology_sector_maps_to_growth_band() {
        let suggested = suggest_assumptions(
            "Technology",
            "Consumer Electronics",
            Some(SizeCategory::MegaCap),
            180.0,
            2.8e12,
        );
        assert!(!suggested.used_defaults);
        // 0.12 - 0.01 mega-cap adjustment
        assert!((suggested.assumptions.growth_rate - 0.11).abs() < 1e-12);
        assert!((suggested.assumptions.discount_rate - 0.10).abs() < 1e-12);
        assert_eq!(suggested.assumptions.projection_years, 5);
        assert!(suggested.reasoning.growth_rate.contains("Technology"));
        assert!(suggested.reasoning.growth_rate.contains("mega-cap"));
    }

    #[test]
    fn sector_aliases_are_matched() {
        let via_alias = suggest_assumptions("Basic Materials", "", None, 0.0, 0.0);
        let direct = suggest_assumptions("Materials", "", None, 0.0, 0.0);
        assert_eq!(via_alias.assumptions, direct.assumptions);
        assert!(!via_alias.used_defaults);
    }

    #[test]
    fn unknown_sector_falls_back_to_defaults() {
        for sector in ["Unknown", "", "   ", "Quantum Widgets"] {
            let suggested = suggest_assumptions(sector, "Unknown", None, 0.0, 0.0);
            assert!(suggested.used_defaults, "sector {:?}", sector);
            assert_eq!(suggested.assumptions, ValuationAssumptions::default());
            assert!(!suggested.reasoning.discount_rate.is_empty());
        }
    }

    #[test]
    fn every_suggestion_passes_calculator_validation() {
        let mut sectors: Vec<&str> = SECTOR_PROFILES.iter().map(|p| p.sector).collect();
        sectors.push("Unknown");
        for sector in sectors {
            for size in ALL_SIZES {
                let suggested = suggest_assumptions(sector, "", *size, 50.0, 5e9);
                suggested
                    .assumptions
                    .validate()
                    .unwrap_or_else(|err| panic!("{} / {:?}: {}", sector, size, err));
                let assumptions = suggested.assumptions;
                assert!(assumptions.terminal_growth < assumptions.discount_rate);
                assert!(assumptions.discount_rate <= DISCOUNT_RATE_CEILING);
                assert!(assumptions.discount_rate >= DISCOUNT_RATE_FLOOR);
                assert!(assumptions.terminal_growth <= TERMINAL_GROWTH_CEILING);
                assert!(assumptions.terminal_growth >= TERMINAL_GROWTH_FLOOR);
            }
        }
    }

    #[test]
    fn smaller_companies_get_higher_growth_and_discount() {
        let micro = suggest_assumptions("Industrials", "", Some(SizeCategory::MicroCap), 10.0, 1e8);
        let mid = suggest_assumptions("Industrials", "", Some(SizeCategory::MidCap), 10.0, 5e9);
        let mega = suggest_assumptions("Industrials", "", Some(SizeCategory::MegaCap), 10.0, 5e11);

        assert!(micro.assumptions.growth_rate > mid.assumptions.growth_rate);
        assert!(micro.assumptions.discount_rate > mid.assumptions.discount_rate);
        assert!(mega.assumptions.growth_rate < mid.assumptions.growth_rate);
        assert!(mega.assumptions.discount_rate < mid.assumptions.discount_rate);
    }

    #[test]
    fn cyclical_sectors_get_shorter_horizons_than_stable_ones() {
        let energy = suggest_assumptions("Energy", "", None, 0.0, 0.0);
        let utilities = suggest_assumptions("Utilities", "", None, 0.0, 0.0);
        assert!(energy.assumptions.projection_years < utilities.assumptions.projection_years);
    }

    #[test]
    fn size_category_market_cap_buckets() {
        assert_eq!(SizeCategory::from_market_cap(1e8), Some(SizeCategory::MicroCap));
        assert_eq!(SizeCategory::from_market_cap(1e9), Some(SizeCategory::SmallCap));
        assert_eq!(SizeCategory::from_market_cap(5e9), Some(SizeCategory::MidCap));
        assert_eq!(SizeCategory::from_market_cap(5e10), Some(SizeCategory::LargeCap));
        assert_eq!(SizeCategory::from_market_cap(3e11), Some(SizeCategory::MegaCap));
        assert_eq!(SizeCategory::from_market_cap(0.0), None);
        assert_eq!(SizeCategory::from_market_cap(-5.0), None);
        assert_eq!(SizeCategory::from_market_cap(f64::NAN), None);
    }

    #[test]
    fn suggestion_is_deterministic() {
        let first = suggest_assumptions("Healthcare", "Biotechnology", Some(SizeCategory::SmallCap), 12.5, 9e8);
        let second = suggest_assumptions("Healthcare", "Biotechnology", Some(SizeCategory::SmallCap), 12.5, 9e8);
        assert_eq!(first, second);
    }
}

use serde::{Deserialize, Serialize};

use crate::dcf::ValuationAssumptions;

/// Market-capitalization size buckets used when refining suggested
/// assumptions. Standard cutoffs: micro below $300M, small below $2B,
/// mid below $10B, large below $200B, mega at or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    MicroCap,
    SmallCap,
    MidCap,
    LargeCap,
    MegaCap,
}

impl SizeCategory {
    /// Classifies a market cap in dollars. Returns `None` when the cap is
    /// missing or non-positive, so callers can skip size adjustment
    /// instead of defaulting to the smallest bucket.
    pub fn from_market_cap(market_cap: f64) -> Option<Self> {
        if !market_cap.is_finite() || market_cap <= 0.0 {
            return None;
        }
        Some(if market_cap < 300_000_000.0 {
            SizeCategory::MicroCap
        } else if market_cap < 2_000_000_000.0 {
            SizeCategory::SmallCap
        } else if market_cap < 10_000_000_000.0 {
            SizeCategory::MidCap
        } else if market_cap < 200_000_000_000.0 {
            SizeCategory::LargeCap
        } else {
            SizeCategory::MegaCap
        })
    }

    /// Wire token for the category, matching the serialized enum form,
    /// e.g. "mid_cap".
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::MicroCap => "micro_cap",
            SizeCategory::SmallCap => "small_cap",
            SizeCategory::MidCap => "mid_cap",
            SizeCategory::LargeCap => "large_cap",
            SizeCategory::MegaCap => "mega_cap",
        }
    }

    /// Human-readable label for rationale text.
    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::MicroCap => "micro-cap",
            SizeCategory::SmallCap => "small-cap",
            SizeCategory::MidCap => "mid-cap",
            SizeCategory::LargeCap => "large-cap",
            SizeCategory::MegaCap => "mega-cap",
        }
    }
}

/// One row of the sector policy table: baseline assumptions for companies
/// in that sector before any size adjustment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectorProfile {
    pub sector: &'static str,
    /// Lowercased aliases this row also matches (provider naming drift).
    pub aliases: &'static [&'static str],
    pub growth_rate: f64,
    pub terminal_growth: f64,
    pub discount_rate: f64,
    pub projection_years: u32,
    /// Short characterization used in rationale sentences,
    /// e.g. "high-growth" or "cyclical".
    pub character: &'static str,
}

/// One explanation sentence per suggested field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssumptionReasoning {
    pub growth_rate: String,
    pub terminal_growth: String,
    pub discount_rate: String,
    pub projection_years: String,
}

/// Output of the suggester: a ready-to-edit assumption set plus the
/// rationale for each field. Purely advisory; the calculator behaves
/// identically whether assumptions come from here or from manual entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAssumptions {
    pub assumptions: ValuationAssumptions,
    pub reasoning: AssumptionReasoning,
    /// True when the sector was unrecognized and the conservative default
    /// band was used instead.
    pub used_defaults: bool,
}

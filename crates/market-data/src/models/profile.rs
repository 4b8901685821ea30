use serde::{Deserialize, Serialize};

/// Company profile data from market data providers.
///
/// Everything beyond the symbol is optional - providers routinely omit
/// fundamentals, and callers are expected to degrade gracefully.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Symbol the profile was fetched for
    pub symbol: String,

    /// Company/asset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Business sector (e.g., "Technology")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Industry within sector (e.g., "Consumer Electronics")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Market capitalization in the quote currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    /// Shares outstanding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding: Option<f64>,

    /// Trailing free cash flow, when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_cash_flow: Option<f64>,
}

impl CompanyProfile {
    /// Create an empty profile for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Sector normalized for classification: provider naming drift such as
    /// "Basic Materials" is mapped onto the canonical vocabulary.
    pub fn normalized_sector(&self) -> Option<&str> {
        match self.sector.as_deref() {
            Some("Basic Materials") => Some("Materials"),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_sector_maps_basic_materials() {
        let mut profile = CompanyProfile::new("X");
        profile.sector = Some("Basic Materials".to_string());
        assert_eq!(profile.normalized_sector(), Some("Materials"));

        profile.sector = Some("Technology".to_string());
        assert_eq!(profile.normalized_sector(), Some("Technology"));

        profile.sector = None;
        assert_eq!(profile.normalized_sector(), None);
    }
}

//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, Quote};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Implementations must be stateless per request; retry/backoff policy
/// belongs to the caller.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error payloads.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch the company profile (classification and fundamentals) for a
    /// symbol.
    async fn get_profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError>;
}

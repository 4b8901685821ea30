//! Yahoo Finance market data provider.
//!
//! Uses the public quoteSummary endpoint for both quotes and company
//! profiles. No API key required; Yahoo rate limits aggressively, which
//! surfaces as [`MarketDataError::RateLimited`].

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{CompanyProfile, Quote};
use crate::provider::MarketDataProvider;

use models::{YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const PROVIDER_ID: &str = "YAHOO";

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooProvider {
    /// Create a provider against the public Yahoo endpoint.
    pub fn new() -> Self {
        Self::with_options(None, DEFAULT_TIMEOUT)
    }

    /// Create a provider against a custom base URL (tests, proxies).
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_options(Some(base_url), DEFAULT_TIMEOUT)
    }

    /// Create a provider with an explicit base URL override and request
    /// timeout.
    pub fn with_options(base_url: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; northcreek/0.3)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Fetch and parse a quoteSummary payload for a symbol.
    async fn fetch_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}",
            self.base_url,
            urlencode(symbol)
        );

        debug!("Yahoo quoteSummary request for {} ({})", symbol, modules);

        let response = self
            .client
            .get(&url)
            .query(&[("modules", modules)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        let parsed: YahooQuoteSummaryResponse = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::Deserialization(e.to_string()))?;

        parsed
            .quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let result = self.fetch_summary(symbol, "price").await?;

        let price_data = result.price.ok_or_else(|| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("No price module in response for {}", symbol),
        })?;

        let price = price_data
            .regular_market_price
            .and_then(|d| d.raw)
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("No market price for {}", symbol),
            })?;

        let timestamp = price_data
            .regular_market_time
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .unwrap_or_else(Utc::now);

        Ok(Quote {
            symbol: symbol.to_string(),
            price,
            currency: price_data.currency.unwrap_or_else(|| "USD".to_string()),
            timestamp,
            source: PROVIDER_ID.to_string(),
        })
    }

    async fn get_profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        let result = self
            .fetch_summary(
                symbol,
                "price,summaryProfile,summaryDetail,defaultKeyStatistics,financialData",
            )
            .await?;

        let mut profile = CompanyProfile::new(symbol);

        if let Some(price) = &result.price {
            profile.name = price.long_name.clone().or_else(|| price.short_name.clone());
            profile.market_cap = price.market_cap.as_ref().and_then(|d| d.raw);
        }
        if let Some(summary) = &result.summary_profile {
            profile.sector = summary.sector.clone();
            profile.industry = summary.industry.clone();
        }
        // summaryDetail carries marketCap for symbols where price doesn't
        if profile.market_cap.is_none() {
            profile.market_cap = result
                .summary_detail
                .as_ref()
                .and_then(|d| d.market_cap.as_ref())
                .and_then(|d| d.raw);
        }
        profile.shares_outstanding = result
            .default_key_statistics
            .as_ref()
            .and_then(|s| s.shares_outstanding.as_ref())
            .and_then(|d| d.raw);
        profile.free_cash_flow = result
            .financial_data
            .as_ref()
            .and_then(|f| f.free_cashflow.as_ref())
            .and_then(|d| d.raw);

        Ok(profile)
    }
}

/// Minimal percent-encoding for ticker path segments (handles symbols like
/// "BRK.B" untouched and escapes anything outside the unreserved set).
fn urlencode(symbol: &str) -> String {
    let mut encoded = String::with_capacity(symbol.len());
    for byte in symbol.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'^') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

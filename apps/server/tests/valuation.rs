use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use chrono::Utc;
use northcreek_market_data::{CompanyProfile, MarketDataError, MarketDataProvider, Quote};
use northcreek_server::{api::app_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Provider returning canned data, or SymbolNotFound for anything else.
struct StubProvider {
    symbol: String,
    quote_price: f64,
    profile: CompanyProfile,
}

impl StubProvider {
    fn acme() -> Self {
        Self {
            symbol: "ACME".to_string(),
            quote_price: 50.0,
            profile: CompanyProfile {
                symbol: "ACME".to_string(),
                name: Some("Acme Corp".to_string()),
                sector: Some("Technology".to_string()),
                industry: Some("Software - Application".to_string()),
                market_cap: Some(5_000_000_000.0),
                shares_outstanding: Some(10.0),
                free_cash_flow: Some(100.0),
            },
        }
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if symbol != self.symbol {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(Quote {
            symbol: symbol.to_string(),
            price: self.quote_price,
            currency: "USD".to_string(),
            timestamp: Utc::now(),
            source: "STUB".to_string(),
        })
    }

    async fn get_profile(&self, symbol: &str) -> Result<CompanyProfile, MarketDataError> {
        if symbol != self.symbol {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        Ok(self.profile.clone())
    }
}

fn test_router(provider: StubProvider) -> axum::Router {
    app_router(
        Arc::new(AppState {
            market_data: Arc::new(provider),
        }),
        Duration::from_secs(30),
    )
}

async fn get_json(router: axum::Router, uri: &str) -> (u16, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (status, body) = get_json(test_router(StubProvider::acme()), "/api/v1/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn calculate_returns_full_report_with_exact_field_names() {
    let uri = "/api/v1/dcf/calculate/acme?growth_rate=0.05&terminal_growth=0.025&discount_rate=0.10&projection_years=5";
    let (status, body) = get_json(test_router(StubProvider::acme()), uri).await;
    assert_eq!(status, 200, "body: {}", body);

    assert_eq!(body["ticker"], "ACME");
    assert_eq!(body["company_name"], "Acme Corp");
    assert_eq!(body["current_price"], 50.0);

    let assumptions = &body["assumptions"];
    assert_eq!(assumptions["growth_rate"], 0.05);
    assert_eq!(assumptions["terminal_growth"], 0.025);
    assert_eq!(assumptions["discount_rate"], 0.1);
    assert_eq!(assumptions["projection_years"], 5);
    assert_eq!(assumptions["current_fcf"], 100.0);
    assert_eq!(assumptions["shares_outstanding"], 10.0);

    let projections = body["projections"].as_array().unwrap();
    assert_eq!(projections.len(), 5);
    assert_eq!(projections[0]["year"], 1);
    assert_eq!(projections[0]["cash_flow"], 105.0);
    assert_eq!(projections[0]["discount_factor"], 0.9091);
    assert_eq!(projections[0]["present_value"], 95.45);

    assert_eq!(body["terminal_value"]["value"], 1744.25);
    assert_eq!(body["terminal_value"]["present_value"], 1083.04);
    assert_eq!(body["terminal_value"]["growth_rate"], 0.025);

    let valuation = &body["valuation"];
    assert_eq!(valuation["sum_pv_cash_flows"], 435.81);
    assert_eq!(valuation["terminal_pv"], 1083.04);
    assert_eq!(valuation["enterprise_value"], 1518.86);
    assert_eq!(valuation["intrinsic_value_per_share"], 151.89);
    assert_eq!(valuation["current_price"], 50.0);
    assert_eq!(valuation["margin_of_safety"], 203.77);

    assert_eq!(body["recommendation"]["rating"], "Strong Buy");
    assert_eq!(body["recommendation"]["color"], "green");
    assert!(body["recommendation"]["message"]
        .as_str()
        .unwrap()
        .contains("undervalued"));
}

#[tokio::test]
async fn calculate_uses_defaults_when_query_is_empty() {
    let (status, body) =
        get_json(test_router(StubProvider::acme()), "/api/v1/dcf/calculate/ACME").await;
    assert_eq!(status, 200);
    assert_eq!(body["assumptions"]["growth_rate"], 0.05);
    assert_eq!(body["assumptions"]["terminal_growth"], 0.025);
    assert_eq!(body["assumptions"]["discount_rate"], 0.1);
    assert_eq!(body["assumptions"]["projection_years"], 5);
}

#[tokio::test]
async fn calculate_rejects_non_convergent_assumptions() {
    let uri = "/api/v1/dcf/calculate/ACME?terminal_growth=0.10&discount_rate=0.10";
    let (status, body) = get_json(test_router(StubProvider::acme()), uri).await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("terminal growth") || body["error"]
        .as_str()
        .unwrap()
        .contains("Terminal growth"));
}

#[tokio::test]
async fn calculate_rejects_out_of_range_query_values() {
    let uri = "/api/v1/dcf/calculate/ACME?growth_rate=2.0";
    let (status, body) = get_json(test_router(StubProvider::acme()), uri).await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("growth_rate"));

    let uri = "/api/v1/dcf/calculate/ACME?projection_years=50";
    let (status, _) = get_json(test_router(StubProvider::acme()), uri).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn unknown_ticker_maps_to_not_found() {
    let (status, body) =
        get_json(test_router(StubProvider::acme()), "/api/v1/dcf/calculate/NOPE").await;
    assert_eq!(status, 404);
    assert!(body["error"].as_str().unwrap().contains("NOPE"));
}

#[tokio::test]
async fn suggestions_classify_sector_and_size() {
    let (status, body) =
        get_json(test_router(StubProvider::acme()), "/api/v1/dcf/suggestions/ACME").await;
    assert_eq!(status, 200, "body: {}", body);

    assert_eq!(body["ticker"], "ACME");
    assert_eq!(body["company_name"], "Acme Corp");
    assert_eq!(body["sector"], "Technology");
    assert_eq!(body["industry"], "Software - Application");
    assert_eq!(body["current_price"], 50.0);
    assert_eq!(body["market_cap"], 5_000_000_000.0);
    assert_eq!(body["size_category"], "mid_cap");

    let suggestions = &body["suggestions"];
    let growth = suggestions["growth_rate"].as_f64().unwrap();
    let terminal = suggestions["terminal_growth"].as_f64().unwrap();
    let discount = suggestions["discount_rate"].as_f64().unwrap();
    assert!(growth > 0.0);
    assert!(terminal < discount, "suggestions must always be convergent");
    assert!(suggestions["projection_years"].as_u64().unwrap() >= 1);

    let reasoning = &body["reasoning"];
    for field in ["growth_rate", "terminal_growth", "discount_rate", "projection_years"] {
        assert!(
            !reasoning[field].as_str().unwrap().is_empty(),
            "missing rationale for {}",
            field
        );
    }
    assert!(reasoning["growth_rate"].as_str().unwrap().contains("Technology"));
}

#[tokio::test]
async fn suggestions_without_market_cap_report_unknown_size() {
    let mut provider = StubProvider::acme();
    provider.profile.market_cap = None;
    provider.profile.shares_outstanding = None;

    let (status, body) = get_json(test_router(provider), "/api/v1/dcf/suggestions/ACME").await;
    assert_eq!(status, 200, "body: {}", body);
    assert_eq!(body["size_category"], "unknown");
    assert_eq!(body["market_cap"], 0.0);
    assert!(body["suggestions"]["growth_rate"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn suggestions_for_unknown_ticker_are_not_found() {
    let (status, _) =
        get_json(test_router(StubProvider::acme()), "/api/v1/dcf/suggestions/NOPE").await;
    assert_eq!(status, 404);
}

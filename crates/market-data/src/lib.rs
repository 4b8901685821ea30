//! Northcreek Market Data Crate
//!
//! Provider-agnostic fetching of the two external inputs the valuation
//! service needs: a current quote and a company profile (sector, industry,
//! market cap, shares outstanding, trailing free cash flow).
//!
//! # Core Types
//!
//! - [`Quote`] - A point-in-time price observation
//! - [`CompanyProfile`] - Provider-sourced classification and fundamentals
//! - [`MarketDataProvider`] - Trait implemented by each data source
//! - [`YahooProvider`] - Default implementation against Yahoo Finance

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CompanyProfile, Quote};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;

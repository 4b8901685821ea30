//! Market data provider trait and implementations.

mod traits;
pub mod yahoo;

pub use traits::MarketDataProvider;

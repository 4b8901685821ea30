use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time price observation for a symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol the quote is for (provider notation, e.g. "AAPL")
    pub symbol: String,

    /// Last traded / regular market price
    pub price: f64,

    /// Quote currency (ISO 4217)
    pub currency: String,

    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,

    /// Source of the quote (e.g. "YAHOO")
    pub source: String,
}

use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Server configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind, e.g. "0.0.0.0:8000"
    pub listen_addr: String,

    /// Override for the market data base URL (tests, proxies).
    /// Defaults to the provider's public endpoint when unset.
    pub market_data_base_url: Option<String>,

    /// Budget for one request, applied both to the HTTP layer and to
    /// outbound market-data calls.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("NC_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            listen_addr: std::env::var("NC_LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            market_data_base_url: std::env::var("NC_MARKET_DATA_BASE_URL").ok(),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_is_read_from_env_with_default() {
        std::env::remove_var("NC_REQUEST_TIMEOUT_SECS");
        assert_eq!(Config::from_env().request_timeout, Duration::from_secs(30));

        std::env::set_var("NC_REQUEST_TIMEOUT_SECS", "5");
        assert_eq!(Config::from_env().request_timeout, Duration::from_secs(5));

        // Unparseable values fall back rather than panicking at startup.
        std::env::set_var("NC_REQUEST_TIMEOUT_SECS", "soon");
        assert_eq!(Config::from_env().request_timeout, Duration::from_secs(30));

        std::env::remove_var("NC_REQUEST_TIMEOUT_SECS");
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use northcreek_market_data::MarketDataError;
use northcreek_valuation::ValuationError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error surface of the HTTP API. Maps crate errors onto status codes and
/// a uniform `{"error": "..."}` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValuationError> for ApiError {
    fn from(err: ValuationError) -> Self {
        // Both variants are caller-correctable validation failures.
        ApiError::BadRequest(err.to_string())
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::SymbolNotFound(_) => ApiError::NotFound(err.to_string()),
            MarketDataError::RateLimited { .. }
            | MarketDataError::Timeout { .. }
            | MarketDataError::ProviderError { .. }
            | MarketDataError::Deserialization(_) => {
                ApiError::UpstreamUnavailable(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

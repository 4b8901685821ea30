use thiserror::Error;

// Create a type alias for Result using our error type
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors produced by the valuation core.
///
/// Both variants are caller-correctable input problems, surfaced
/// synchronously and never retried by the core itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// The assumption set cannot produce a convergent valuation,
    /// e.g. terminal growth at or above the discount rate.
    #[error("Invalid assumptions: {0}")]
    InvalidAssumptions(String),

    /// The company snapshot itself is unusable, e.g. zero share count
    /// or a zero market price.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

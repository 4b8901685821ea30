//! Suggested valuation assumptions - sector/size policy tables.

mod suggestions_model;
mod suggestions_service;

pub use suggestions_model::{AssumptionReasoning, SizeCategory, SuggestedAssumptions};
pub use suggestions_service::suggest_assumptions;

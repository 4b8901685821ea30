//! Discounted cash flow valuation - models and calculator.

pub mod dcf_calculator;
mod dcf_model;

pub use dcf_calculator::{calculate_valuation, classify_margin};
pub use dcf_model::*;

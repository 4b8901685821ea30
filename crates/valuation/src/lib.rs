pub mod constants;
pub mod dcf;
pub mod errors;
pub mod suggestions;

pub use dcf::*;
pub use errors::{Result, ValuationError};
pub use suggestions::*;

//! Domain models shared by all providers.

mod profile;
mod quote;

pub use profile::CompanyProfile;
pub use quote::Quote;

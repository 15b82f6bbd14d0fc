//! Product and origin code resolution.

pub mod country;
pub mod upc;

pub use country::CountryResolver;
pub use upc::{NOT_AVAILABLE, UpcCode, upc_check_digit};

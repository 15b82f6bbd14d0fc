//! Field-level conversions for furniture SKU data.
//!
//! - **normalization**: unit conversion, currency rounding, yes/no coercion, text helpers
//! - **codes**: UPC-A validation with EAN-13 transcoding, country alpha-3 resolution
//! - **error**: the conversion error taxonomy

pub mod codes;
pub mod error;
pub mod normalization;

pub use codes::{CountryResolver, UpcCode, upc_check_digit};
pub use error::{ConversionError, Result};
pub use normalization::{
    SetSizeWords, convert_distance, convert_weight, format_currency, title_case, yes_no_to_bool,
};

//! Normalization functions for raw furniture data.
//!
//! - **units**: distance and weight conversion
//! - **currency**: two-decimal currency rounding
//! - **boolean**: yes/no coercion
//! - **numeric**: real-number validation and rendering
//! - **text**: title casing and set-size word replacement

pub mod boolean;
pub mod currency;
pub mod numeric;
pub mod text;
pub mod units;

pub use boolean::yes_no_to_bool;
pub use currency::format_currency;
pub use numeric::{format_numeric, is_positive_real};
pub use text::{SetSizeWords, title_case};
pub use units::{convert_distance, convert_weight};

//! CSV input and output.
//!
//! - **reader**: supplier CSV rows into [`sku_model::RawRecord`]s
//! - **writer**: normalized records back out in schema order

pub mod reader;
pub mod writer;

pub use reader::{RawTable, normalize_header, read_raw_records, read_raw_records_from};
pub use writer::{default_output_path, write_normalized, write_normalized_to};

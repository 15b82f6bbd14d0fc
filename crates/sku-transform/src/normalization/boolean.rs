//! Yes/no coercion.

use sku_model::FieldValue;

use crate::error::{ConversionError, Result};

/// Convert a yes/no answer to a flag.
///
/// Empty input passes through as empty text. Matching is a case-insensitive
/// substring test, `yes` checked before `no`.
pub fn yes_no_to_bool(value: &str) -> Result<FieldValue> {
    if value.is_empty() {
        return Ok(FieldValue::empty());
    }
    let lower = value.to_lowercase();
    if lower.contains("yes") {
        Ok(FieldValue::Flag(true))
    } else if lower.contains("no") {
        Ok(FieldValue::Flag(false))
    } else {
        Err(ConversionError::InvalidBoolean {
            value: value.to_string(),
        })
    }
}

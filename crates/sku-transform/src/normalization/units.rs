//! Distance and weight conversion.

use sku_model::{DistanceUnit, WeightUnit};

use super::numeric::{format_numeric, is_positive_real};
use crate::error::{ConversionError, Result};

/// Convert a distance from one unit to another (inches by default in callers).
///
/// Empty input passes through. When both units match the trimmed input is
/// returned unchanged, so converting already-normalized data is idempotent.
pub fn convert_distance(value: &str, from: DistanceUnit, to: DistanceUnit) -> Result<String> {
    convert(value, from.inches_per_unit(), to.inches_per_unit(), from == to)
}

/// Convert a weight from one unit to another (pounds by default in callers).
///
/// Same contract as [`convert_distance`].
pub fn convert_weight(value: &str, from: WeightUnit, to: WeightUnit) -> Result<String> {
    convert(value, from.pounds_per_unit(), to.pounds_per_unit(), from == to)
}

fn convert(value: &str, from_factor: f64, to_factor: f64, identity: bool) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !is_positive_real(trimmed) {
        return Err(ConversionError::InvalidMeasurement {
            value: value.to_string(),
        });
    }
    if identity {
        return Ok(trimmed.to_string());
    }
    let parsed: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidMeasurement {
            value: value.to_string(),
        })?;
    let converted = parsed * from_factor / to_factor;
    if !converted.is_finite() {
        return Err(ConversionError::InvalidMeasurement {
            value: value.to_string(),
        });
    }
    Ok(format_numeric(converted))
}

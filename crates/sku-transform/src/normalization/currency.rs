//! Currency rounding to the unit of accounting.

use super::numeric::is_positive_real;
use crate::error::{ConversionError, Result};

/// Round a currency value to exactly two decimals.
///
/// `$` and `,` are stripped first. Rounding is half-up, done on the decimal
/// digits directly so `0.125` becomes `0.13` regardless of float
/// representation.
pub fn format_currency(value: &str) -> Result<String> {
    let cleaned: String = value.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Ok(String::new());
    }
    if !is_positive_real(cleaned) {
        return Err(invalid(value));
    }

    let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned, ""));
    let whole = whole.trim_start_matches('0');
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid(value))?
    };

    let mut digits = fraction.bytes().map(|b| u128::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|thousandths| thousandths >= 5);

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + u128::from(round_up)))
        .ok_or_else(|| invalid(value))?;
    Ok(format!("{}.{:02}", cents / 100, cents % 100))
}

fn invalid(value: &str) -> ConversionError {
    ConversionError::InvalidCurrency {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_pads() {
        assert_eq!(format_currency("$1,234.5").unwrap(), "1234.50");
        assert_eq!(format_currency("12").unwrap(), "12.00");
        assert_eq!(format_currency(".5").unwrap(), "0.50");
        assert_eq!(format_currency("007.10").unwrap(), "7.10");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(format_currency("0.125").unwrap(), "0.13");
        assert_eq!(format_currency("2.675").unwrap(), "2.68");
        assert_eq!(format_currency("0.1249").unwrap(), "0.12");
        assert_eq!(format_currency("9.995").unwrap(), "10.00");
        assert_eq!(format_currency("99.999").unwrap(), "100.00");
    }

    #[test]
    fn empty_passes_through() {
        assert_eq!(format_currency("").unwrap(), "");
        assert_eq!(format_currency("$").unwrap(), "");
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            format_currency("abc").unwrap_err(),
            ConversionError::InvalidCurrency {
                value: "abc".to_string()
            }
        );
        assert!(format_currency("-5.00").is_err());
        assert!(format_currency("12.").is_err());
    }

    #[test]
    fn rejects_overflowing_values() {
        let huge = "9".repeat(40);
        assert!(format_currency(&huge).is_err());
    }
}

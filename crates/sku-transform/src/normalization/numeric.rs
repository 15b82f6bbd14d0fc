//! Numeric validation and rendering.

use std::sync::LazyLock;

use regex::Regex;

/// Non-negative real numbers: `123`, `1.234`, `.5`. No sign, no exponent.
static POSITIVE_REAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*\.)?\d+$").expect("Invalid positive real regex"));

/// Returns true if the value is a plain non-negative real number.
pub fn is_positive_real(value: &str) -> bool {
    POSITIVE_REAL_REGEX.is_match(value)
}

/// Formats a float with the shortest representation that round-trips.
pub fn format_numeric(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_reals() {
        for value in ["0", "123", "1.234", ".1230", "007.50"] {
            assert!(is_positive_real(value), "{value}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for value in ["", "-1", "1.", "1e5", "1,000", "12 in", " 1", "1.2.3"] {
            assert!(!is_positive_real(value), "{value}");
        }
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_numeric(30.0), "30");
        assert_eq!(format_numeric(0.625), "0.625");
    }
}

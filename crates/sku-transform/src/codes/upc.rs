//! UPC-A validation and EAN-13 transcoding.

use std::fmt;

use crate::error::{ConversionError, Result};

/// Sentinel for fields that cannot be derived from the code.
pub const NOT_AVAILABLE: &str = "N/A";

const UPC_LEN: usize = 12;

/// Compute the UPC-A check digit from the first 11 digits of `payload`.
///
/// `(3 * sum of digits 0,2,..,10 + sum of digits 1,3,..,9) mod 10`; the check
/// digit is 0 when that is 0, otherwise 10 minus it. Returns `None` if fewer
/// than 11 leading ASCII digits are available.
pub fn upc_check_digit(payload: &str) -> Option<u8> {
    let bytes = payload.as_bytes();
    if bytes.len() < UPC_LEN - 1 || !bytes[..UPC_LEN - 1].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let (mut odd_sum, mut even_sum) = (0u32, 0u32);
    for (index, byte) in bytes[..UPC_LEN - 1].iter().enumerate() {
        let digit = u32::from(byte - b'0');
        if index % 2 == 0 {
            odd_sum += digit;
        } else {
            even_sum += digit;
        }
    }
    let remainder = (odd_sum * 3 + even_sum) % 10;
    let check = if remainder == 0 { 0 } else { 10 - remainder };
    u8::try_from(check).ok()
}

/// A UPC-A code split into its parts.
///
/// Derived parts are [`NOT_AVAILABLE`] when the code is not 12 digits long,
/// and the EAN-13 form is [`NOT_AVAILABLE`] whenever the code is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcCode {
    digits: String,
    system_digit: String,
    manufacturer_code: String,
    product_code: String,
    check_digit: String,
    ean13: String,
    valid: bool,
}

impl UpcCode {
    /// Validate a code, appending a missing check digit to 11-digit codes when
    /// `auto_correct` is set.
    ///
    /// Empty input is an invalid code, not an error. Non-digit characters are
    /// reported as [`ConversionError::MalformedCode`].
    pub fn parse(code: &str, auto_correct: bool) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Ok(Self::unavailable(String::new()));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::MalformedCode {
                value: code.to_string(),
                reason: "contains non-digit characters".to_string(),
            });
        }

        let mut digits = trimmed.to_string();
        let valid = match digits.len() {
            UPC_LEN => upc_check_digit(&digits).is_some_and(|check| {
                digits.as_bytes()[UPC_LEN - 1] == b'0' + check
            }),
            len if len == UPC_LEN - 1 && auto_correct => match upc_check_digit(&digits) {
                Some(check) => {
                    digits.push(char::from(b'0' + check));
                    true
                }
                None => false,
            },
            _ => false,
        };

        if digits.len() != UPC_LEN {
            return Ok(Self::unavailable(digits));
        }

        let system_digit = digits[0..1].to_string();
        let manufacturer_code = digits[1..6].to_string();
        let product_code = digits[6..11].to_string();
        let check_digit = digits[11..12].to_string();
        let ean13 = if valid {
            format!(
                "0{}{}-{}{}-{}",
                system_digit,
                &manufacturer_code[..1],
                &manufacturer_code[1..],
                product_code,
                check_digit
            )
        } else {
            NOT_AVAILABLE.to_string()
        };

        Ok(Self {
            digits,
            system_digit,
            manufacturer_code,
            product_code,
            check_digit,
            ean13,
            valid,
        })
    }

    fn unavailable(digits: String) -> Self {
        Self {
            digits,
            system_digit: NOT_AVAILABLE.to_string(),
            manufacturer_code: NOT_AVAILABLE.to_string(),
            product_code: NOT_AVAILABLE.to_string(),
            check_digit: NOT_AVAILABLE.to_string(),
            ean13: NOT_AVAILABLE.to_string(),
            valid: false,
        }
    }

    /// The code's digits, including an appended check digit.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn system_digit(&self) -> &str {
        &self.system_digit
    }

    pub fn manufacturer_code(&self) -> &str {
        &self.manufacturer_code
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn check_digit(&self) -> &str {
        &self.check_digit
    }

    /// EAN-13 rendering: `0{d0}{d1}-{d2..d5}{d6..d10}-{d11}`.
    pub fn ean13(&self) -> &str {
        &self.ean13
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True when no code was supplied at all.
    pub fn is_missing(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for UpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_of_known_code() {
        // 036000291452 is a widely published valid UPC-A.
        assert_eq!(upc_check_digit("03600029145"), Some(2));
        assert_eq!(upc_check_digit("0360002914"), None);
        assert_eq!(upc_check_digit("0360002914x"), None);
    }

    #[test]
    fn valid_code_transcodes() {
        let upc = UpcCode::parse("036000291452", false).unwrap();
        assert!(upc.is_valid());
        assert_eq!(upc.system_digit(), "0");
        assert_eq!(upc.manufacturer_code(), "36000");
        assert_eq!(upc.product_code(), "29145");
        assert_eq!(upc.check_digit(), "2");
        assert_eq!(upc.ean13(), "003-600029145-2");
        assert_eq!(upc.to_string(), "036000291452");
    }

    #[test]
    fn bad_checksum_is_invalid() {
        let upc = UpcCode::parse("036000291453", false).unwrap();
        assert!(!upc.is_valid());
        assert_eq!(upc.ean13(), NOT_AVAILABLE);
        assert_eq!(upc.manufacturer_code(), "36000");
    }

    #[test]
    fn eleven_digits_without_correction_is_invalid() {
        let upc = UpcCode::parse("03600029145", false).unwrap();
        assert!(!upc.is_valid());
        assert_eq!(upc.ean13(), NOT_AVAILABLE);
        assert_eq!(upc.check_digit(), NOT_AVAILABLE);
    }

    #[test]
    fn eleven_digits_with_correction_appends_check_digit() {
        let upc = UpcCode::parse("03600029145", true).unwrap();
        assert!(upc.is_valid());
        assert_eq!(upc.digits(), "036000291452");
        assert_eq!(upc.ean13(), "003-600029145-2");
    }

    #[test]
    fn empty_is_invalid_without_error() {
        let upc = UpcCode::parse("", true).unwrap();
        assert!(!upc.is_valid());
        assert!(upc.is_missing());
        assert_eq!(upc.ean13(), NOT_AVAILABLE);
        assert_eq!(upc.system_digit(), NOT_AVAILABLE);
    }

    #[test]
    fn other_lengths_are_invalid() {
        for code in ["1", "1234567890", "1234567890123"] {
            let upc = UpcCode::parse(code, true).unwrap();
            assert!(!upc.is_valid(), "{code}");
            assert_eq!(upc.ean13(), NOT_AVAILABLE);
        }
    }

    #[test]
    fn non_digits_are_malformed() {
        let error = UpcCode::parse("03600029145A", false).unwrap_err();
        assert!(matches!(error, ConversionError::MalformedCode { .. }));
        assert_eq!(error.value(), "03600029145A");
    }
}

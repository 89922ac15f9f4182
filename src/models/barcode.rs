use std::fmt;
use std::str::FromStr;

use crate::encoder::{ChecksumPolicy, checksum, ean13, format, validate};
use crate::error::{Error, Result};
use crate::models::ModulePattern;

/// Number of digits in an EAN-13 value
pub const EAN13_LEN: usize = 13;

/// A validated EAN-13 value: exactly 13 ASCII digits
///
/// The only way to obtain one is through validation, so a held value can be
/// encoded without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BarcodeValue {
    digits: [u8; EAN13_LEN],
}

impl BarcodeValue {
    /// Parse a candidate string, accepting any 13-digit numeral
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_policy(s, ChecksumPolicy::Lenient)
    }

    /// Parse a candidate string under the given check-digit policy
    pub fn parse_with_policy(s: &str, policy: ChecksumPolicy) -> Result<Self> {
        let digits = validate::digits_of(s)?;
        let value = Self { digits };
        if policy == ChecksumPolicy::Strict {
            let expected = value.expected_check_digit();
            let found = value.check_digit();
            if expected != found {
                return Err(Error::ChecksumMismatch { expected, found });
            }
        }
        Ok(value)
    }

    /// Build a value from 12 payload digits, appending the computed check digit
    pub fn with_check_digit(payload: &str) -> Result<Self> {
        let check = checksum::compute_check_digit(payload)?;
        let mut digits = [0u8; EAN13_LEN];
        for (slot, b) in digits.iter_mut().zip(payload.bytes()) {
            *slot = b - b'0';
        }
        digits[EAN13_LEN - 1] = check;
        Ok(Self { digits })
    }

    /// Digit values, leftmost first
    pub fn digits(&self) -> &[u8; EAN13_LEN] {
        &self.digits
    }

    /// The leading digit, which selects the left-hand parity pattern
    pub fn first_digit(&self) -> u8 {
        self.digits[0]
    }

    /// The embedded (13th) digit
    pub fn check_digit(&self) -> u8 {
        self.digits[EAN13_LEN - 1]
    }

    /// The check digit the first 12 digits call for
    pub fn expected_check_digit(&self) -> u8 {
        checksum::gtin_check_digit(&self.digits[..EAN13_LEN - 1])
    }

    /// True if the embedded check digit is correct
    pub fn has_valid_checksum(&self) -> bool {
        self.check_digit() == self.expected_check_digit()
    }

    /// Grouped display form `D-DDDDDD-DDDDD-D`
    pub fn formatted(&self) -> String {
        format::format_grouped(&self.to_string())
    }

    /// Encode into the 113-module bar/space pattern
    pub fn encode(&self) -> ModulePattern {
        ean13::encode_digits(&self.digits)
    }

    pub(crate) fn from_digits(digits: [u8; EAN13_LEN]) -> Self {
        Self { digits }
    }
}

impl fmt::Display for BarcodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for BarcodeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let value = BarcodeValue::parse("4006381333931").unwrap();
        assert_eq!(value.to_string(), "4006381333931");
        assert_eq!(value.first_digit(), 4);
        assert_eq!(value.check_digit(), 1);
        assert!(value.has_valid_checksum());
        assert_eq!(value.formatted(), "4-006381-33393-1");
    }

    #[test]
    fn test_lenient_accepts_bad_checksum() {
        let value: BarcodeValue = "4006381333932".parse().unwrap();
        assert!(!value.has_valid_checksum());
        assert_eq!(value.expected_check_digit(), 1);
    }

    #[test]
    fn test_strict_rejects_bad_checksum() {
        let err = BarcodeValue::parse_with_policy("4006381333932", ChecksumPolicy::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ChecksumMismatch {
                expected: 1,
                found: 2
            }
        ));
        assert!(BarcodeValue::parse_with_policy("4006381333931", ChecksumPolicy::Strict).is_ok());
    }

    #[test]
    fn test_with_check_digit() {
        let value = BarcodeValue::with_check_digit("590123412345").unwrap();
        assert_eq!(value.to_string(), "5901234123457");
        assert!(BarcodeValue::with_check_digit("59012341234").is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(BarcodeValue::parse("12345").is_err());
        assert!(BarcodeValue::parse("12345678901a3").is_err());
        assert!(BarcodeValue::parse("").is_err());
    }
}

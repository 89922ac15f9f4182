use tracing::warn;

use crate::config;
use crate::error::{Error, Result};
use crate::models::{BarcodeValue, EAN13_LEN};

/// How strictly an incoming value's check digit is verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumPolicy {
    /// Accept any 13-digit numeral
    #[default]
    Lenient,
    /// Also require the 13th digit to match the computed check digit
    Strict,
}

impl ChecksumPolicy {
    /// Policy selected by `EAN_STRICT_CHECKSUM`
    pub fn from_env() -> Self {
        if config::strict_checksum() {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// True iff `s` is exactly 13 ASCII digits
///
/// No trimming is done and non-ASCII digit classes are rejected.
pub fn is_valid_ean13(s: &str) -> bool {
    s.len() == EAN13_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a candidate and wrap it, applying the check-digit policy
pub fn validate_with_policy(s: &str, policy: ChecksumPolicy) -> Result<BarcodeValue> {
    let result = BarcodeValue::parse_with_policy(s, policy);
    if let Err(Error::ChecksumMismatch { expected, found }) = &result {
        warn!(candidate = s, expected, found, "rejected value with wrong check digit");
    }
    result
}

/// Split a 13-digit string into digit values
pub(crate) fn digits_of(s: &str) -> Result<[u8; EAN13_LEN]> {
    if s.len() != EAN13_LEN {
        return Err(Error::invalid_input(format!(
            "expected {} digits, got {} bytes",
            EAN13_LEN,
            s.len()
        )));
    }
    let mut digits = [0u8; EAN13_LEN];
    for (i, b) in s.bytes().enumerate() {
        if !b.is_ascii_digit() {
            return Err(Error::invalid_input(format!(
                "non-digit character at position {}",
                i
            )));
        }
        digits[i] = b - b'0';
    }
    Ok(digits)
}

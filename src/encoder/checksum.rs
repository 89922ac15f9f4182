use crate::error::{Error, Result};

/// GTIN check digit for a payload of any length (GTIN-8/12/13/14)
///
/// Weights alternate 3, 1, 3, ... starting from the rightmost payload digit.
/// Digits must already be in 0..=9.
pub fn gtin_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// EAN-13 check digit for a 12-digit string
pub fn compute_check_digit(first12: &str) -> Result<u8> {
    if first12.len() != 12 {
        return Err(Error::invalid_input(format!(
            "expected 12 digits, got {} bytes",
            first12.len()
        )));
    }
    let mut payload = [0u8; 12];
    for (i, b) in first12.bytes().enumerate() {
        if !b.is_ascii_digit() {
            return Err(Error::invalid_input(format!(
                "non-digit character at position {}",
                i
            )));
        }
        payload[i] = b - b'0';
    }
    Ok(gtin_check_digit(&payload))
}

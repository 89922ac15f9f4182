use tracing::{debug, trace};

use super::layout::{
    DIGIT_WIDTH, DIGITS_PER_HALF, EDGE_GUARD_BITS, END_GUARD, LEFT_QUIET, MIDDLE_GUARD,
    MIDDLE_GUARD_BITS, RIGHT_QUIET, START_GUARD, TOTAL_MODULES,
};
use super::tables::{FIRST_DIGIT_PARITY, left_group, right_group};
use super::validate::digits_of;
use crate::error::Result;
use crate::models::{EAN13_LEN, ModulePattern};

/// Encode a 13-digit string into its 113-module pattern
///
/// Fails with `InvalidInput` unless the input is exactly 13 ASCII digits;
/// nothing is truncated or padded.
pub fn encode_module_pattern(code: &str) -> Result<ModulePattern> {
    let digits = digits_of(code)?;
    let pattern = encode_digits(&digits);
    debug!(code, modules = pattern.len(), "encoded EAN-13");
    Ok(pattern)
}

/// Encode already-validated digit values (each in 0..=9)
pub(crate) fn encode_digits(digits: &[u8; EAN13_LEN]) -> ModulePattern {
    let mut pattern = ModulePattern::with_capacity(TOTAL_MODULES);

    pattern.push_spaces(LEFT_QUIET);
    pattern.push_bits(EDGE_GUARD_BITS, START_GUARD);

    // Left half: the leading digit is carried only by the parity sequence
    let parity = &FIRST_DIGIT_PARITY[digits[0] as usize];
    for (i, &digit) in digits[1..=DIGITS_PER_HALF].iter().enumerate() {
        trace!(position = i + 1, digit, parity = ?parity[i], "left digit");
        pattern.push_bits(left_group(digit, parity[i]), DIGIT_WIDTH);
    }

    pattern.push_bits(MIDDLE_GUARD_BITS, MIDDLE_GUARD);

    for &digit in &digits[DIGITS_PER_HALF + 1..] {
        pattern.push_bits(right_group(digit), DIGIT_WIDTH);
    }

    pattern.push_bits(EDGE_GUARD_BITS, END_GUARD);
    pattern.push_spaces(RIGHT_QUIET);

    debug_assert_eq!(pattern.len(), TOTAL_MODULES);
    pattern
}

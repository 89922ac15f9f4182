use tracing::debug;

use crate::encoder::layout::{
    self, DIGIT_WIDTH, DIGITS_PER_HALF, EDGE_GUARD_BITS, END_GUARD, MIDDLE_GUARD,
    MIDDLE_GUARD_BITS, START_GUARD, TOTAL_MODULES,
};
use crate::encoder::tables::{Parity, match_left_group, match_parity, match_right_group};
use crate::error::{Error, Result};
use crate::models::{BarcodeValue, EAN13_LEN, ModulePattern};

/// Decode a 113-module EAN-13 pattern back into its digits
///
/// The pattern must be laid out exactly as `encode_module_pattern` produces
/// it: quiet zones blank, guards in place, every digit group present in the
/// tables and a left-hand parity sequence that names a leading digit.
pub fn decode_module_pattern(pattern: &ModulePattern) -> Result<BarcodeValue> {
    if pattern.len() != TOTAL_MODULES {
        return Err(Error::invalid_pattern(
            pattern.len().min(TOTAL_MODULES),
            format!("expected {} modules, got {}", TOTAL_MODULES, pattern.len()),
        ));
    }

    for mut range in [layout::left_quiet(), layout::right_quiet()] {
        if let Some(i) = range.find(|&i| pattern.get(i)) {
            return Err(Error::invalid_pattern(i, "bar inside quiet zone"));
        }
    }

    let guards = [
        (layout::start_guard().start, START_GUARD, EDGE_GUARD_BITS, "start"),
        (layout::middle_guard().start, MIDDLE_GUARD, MIDDLE_GUARD_BITS, "middle"),
        (layout::end_guard().start, END_GUARD, EDGE_GUARD_BITS, "end"),
    ];
    for (start, width, expected, name) in guards {
        check_guard(pattern, start, width, expected, name)?;
    }

    let mut digits = [0u8; EAN13_LEN];
    let mut parity = [Parity::Odd; DIGITS_PER_HALF];

    for i in 0..DIGITS_PER_HALF {
        let start = layout::left_digit(i).start;
        let group = pattern.bits(start, DIGIT_WIDTH);
        let (digit, p) = match_left_group(group)
            .ok_or_else(|| Error::invalid_pattern(start, "unknown left-hand digit group"))?;
        digits[i + 1] = digit;
        parity[i] = p;
    }

    digits[0] = match_parity(&parity).ok_or_else(|| {
        Error::invalid_pattern(
            layout::left_digit(0).start,
            "left-hand parity sequence matches no leading digit",
        )
    })?;

    for i in 0..DIGITS_PER_HALF {
        let start = layout::right_digit(i).start;
        let group = pattern.bits(start, DIGIT_WIDTH);
        digits[DIGITS_PER_HALF + 1 + i] = match_right_group(group)
            .ok_or_else(|| Error::invalid_pattern(start, "unknown right-hand digit group"))?;
    }

    let value = BarcodeValue::from_digits(digits);
    debug!(value = %value, "decoded EAN-13 pattern");
    Ok(value)
}

fn check_guard(
    pattern: &ModulePattern,
    start: usize,
    width: usize,
    expected: u8,
    name: &str,
) -> Result<()> {
    if pattern.bits(start, width) != expected {
        return Err(Error::invalid_pattern(start, format!("missing {} guard", name)));
    }
    Ok(())
}

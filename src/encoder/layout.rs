//! Fixed structural layout of an EAN-13 symbol
//!
//! Segment widths are in modules. All offsets are derived from these
//! constants so that guard positions stay correct if a quiet zone changes.

use std::ops::Range;

/// Leading quiet zone.
pub const LEFT_QUIET: usize = 11;
/// Start guard `101`.
pub const START_GUARD: usize = 3;
/// Modules per encoded digit.
pub const DIGIT_WIDTH: usize = 7;
/// Digits in each half of the symbol.
pub const DIGITS_PER_HALF: usize = 6;
/// Left-hand digit block.
pub const LEFT_BLOCK: usize = DIGIT_WIDTH * DIGITS_PER_HALF;
/// Middle guard `01010`.
pub const MIDDLE_GUARD: usize = 5;
/// Right-hand digit block.
pub const RIGHT_BLOCK: usize = DIGIT_WIDTH * DIGITS_PER_HALF;
/// End guard `101`.
pub const END_GUARD: usize = 3;
/// Trailing quiet zone.
pub const RIGHT_QUIET: usize = 7;

/// Total symbol width including both quiet zones.
pub const TOTAL_MODULES: usize =
    LEFT_QUIET + START_GUARD + LEFT_BLOCK + MIDDLE_GUARD + RIGHT_BLOCK + END_GUARD + RIGHT_QUIET;

/// Start/end guard bit pattern (3 modules).
pub const EDGE_GUARD_BITS: u8 = 0b101;
/// Middle guard bit pattern (5 modules).
pub const MIDDLE_GUARD_BITS: u8 = 0b01010;

const START_GUARD_AT: usize = LEFT_QUIET;
const LEFT_BLOCK_AT: usize = START_GUARD_AT + START_GUARD;
const MIDDLE_GUARD_AT: usize = LEFT_BLOCK_AT + LEFT_BLOCK;
const RIGHT_BLOCK_AT: usize = MIDDLE_GUARD_AT + MIDDLE_GUARD;
const END_GUARD_AT: usize = RIGHT_BLOCK_AT + RIGHT_BLOCK;
const RIGHT_QUIET_AT: usize = END_GUARD_AT + END_GUARD;

/// Module range of the leading quiet zone.
pub fn left_quiet() -> Range<usize> {
    0..START_GUARD_AT
}

/// Module range of the start guard.
pub fn start_guard() -> Range<usize> {
    START_GUARD_AT..LEFT_BLOCK_AT
}

/// Module range of the middle guard.
pub fn middle_guard() -> Range<usize> {
    MIDDLE_GUARD_AT..RIGHT_BLOCK_AT
}

/// Module range of the end guard.
pub fn end_guard() -> Range<usize> {
    END_GUARD_AT..RIGHT_QUIET_AT
}

/// Module range of the trailing quiet zone.
pub fn right_quiet() -> Range<usize> {
    RIGHT_QUIET_AT..TOTAL_MODULES
}

/// Module range of left-hand digit `i` (0-based within the half, 0..6).
pub fn left_digit(i: usize) -> Range<usize> {
    let start = LEFT_BLOCK_AT + i * DIGIT_WIDTH;
    start..start + DIGIT_WIDTH
}

/// Module range of right-hand digit `i` (0-based within the half, 0..6).
pub fn right_digit(i: usize) -> Range<usize> {
    let start = RIGHT_BLOCK_AT + i * DIGIT_WIDTH;
    start..start + DIGIT_WIDTH
}

/// True if module `index` belongs to one of the three guard patterns.
pub fn is_guard(index: usize) -> bool {
    start_guard().contains(&index)
        || middle_guard().contains(&index)
        || end_guard().contains(&index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_width() {
        assert_eq!(TOTAL_MODULES, 113);
        assert_eq!(LEFT_BLOCK, 42);
        assert_eq!(RIGHT_BLOCK, 42);
    }

    #[test]
    fn test_guard_ranges() {
        assert_eq!(start_guard(), 11..14);
        assert_eq!(middle_guard(), 56..61);
        assert_eq!(end_guard(), 103..106);
        assert_eq!(right_quiet(), 106..113);
    }

    #[test]
    fn test_digit_ranges_tile_blocks() {
        assert_eq!(left_digit(0).start, start_guard().end);
        assert_eq!(left_digit(5).end, middle_guard().start);
        assert_eq!(right_digit(0).start, middle_guard().end);
        assert_eq!(right_digit(5).end, end_guard().start);
    }

    #[test]
    fn test_is_guard() {
        let guards: Vec<usize> = (0..TOTAL_MODULES).filter(|&i| is_guard(i)).collect();
        assert_eq!(guards.len(), START_GUARD + MIDDLE_GUARD + END_GUARD);
        assert!(is_guard(11) && is_guard(13) && is_guard(58) && is_guard(105));
        assert!(!is_guard(10) && !is_guard(14) && !is_guard(91) && !is_guard(106));
    }
}

// EAN-13 digit encodings (GS1 General Specifications, section 5.2.1.2).
// Each entry is a 7-module group, most significant bit = leftmost module,
// 1 = bar, 0 = space. Index: digit value.

/// Left-hand digits with odd parity (set A).
pub const LEFT_ODD: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

/// Left-hand digits with even parity (set B).
pub const LEFT_EVEN: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
    0b0001001, 0b0010111,
];

/// Right-hand digits (set C), independent of parity.
pub const RIGHT: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, 0b1001110, 0b1010000, 0b1000100,
    0b1001000, 0b1110100,
];

/// Parity of a left-hand digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Drawn from `LEFT_ODD`
    Odd,
    /// Drawn from `LEFT_EVEN`
    Even,
}

use Parity::{Even as E, Odd as O};

/// Parity of left digits 2..=7, selected by the leading digit.
pub const FIRST_DIGIT_PARITY: [[Parity; 6]; 10] = [
    [O, O, O, O, O, O], // 0
    [O, O, E, O, E, E], // 1
    [O, O, E, E, O, E], // 2
    [O, O, E, E, E, O], // 3
    [O, E, O, O, E, E], // 4
    [O, E, E, O, O, E], // 5
    [O, E, E, E, O, O], // 6
    [O, E, O, E, O, E], // 7
    [O, E, O, E, E, O], // 8
    [O, E, E, O, E, O], // 9
];

/// Look up the 7-module group for a left-hand digit.
pub fn left_group(digit: u8, parity: Parity) -> u8 {
    match parity {
        Parity::Odd => LEFT_ODD[digit as usize],
        Parity::Even => LEFT_EVEN[digit as usize],
    }
}

/// Look up the 7-module group for a right-hand digit.
pub fn right_group(digit: u8) -> u8 {
    RIGHT[digit as usize]
}

/// Reverse lookup of a left-hand group. Returns the digit and the set it came from.
pub fn match_left_group(group: u8) -> Option<(u8, Parity)> {
    if let Some(d) = LEFT_ODD.iter().position(|&g| g == group) {
        return Some((d as u8, Parity::Odd));
    }
    LEFT_EVEN
        .iter()
        .position(|&g| g == group)
        .map(|d| (d as u8, Parity::Even))
}

/// Reverse lookup of a right-hand group.
pub fn match_right_group(group: u8) -> Option<u8> {
    RIGHT.iter().position(|&g| g == group).map(|d| d as u8)
}

/// Recover the leading digit from the parity sequence of the left half.
pub fn match_parity(parity: &[Parity; 6]) -> Option<u8> {
    FIRST_DIGIT_PARITY
        .iter()
        .position(|row| row == parity)
        .map(|d| d as u8)
}

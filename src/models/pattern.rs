use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Compact bar/space sequence (true = bar, false = space)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModulePattern {
    len: usize,
    data: Vec<u8>,
}

impl ModulePattern {
    /// Create an all-space pattern of the given length
    pub fn new(len: usize) -> Self {
        let bytes_needed = len.div_ceil(8);
        Self {
            len,
            data: vec![0; bytes_needed],
        }
    }

    /// Create an empty pattern with room for `capacity` modules
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Vec::with_capacity(capacity.div_ceil(8)),
        }
    }

    /// Number of modules
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the pattern holds no modules
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get module at `index` (out of range reads as space)
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set module at `index` (out of range writes are ignored)
    pub fn set(&mut self, index: usize, bar: bool) {
        if index >= self.len {
            return;
        }
        let byte_index = index / 8;
        let bit_index = index % 8;
        if bar {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Append a single module
    pub fn push(&mut self, bar: bool) {
        if self.len % 8 == 0 {
            self.data.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, bar);
    }

    /// Append the low `width` bits of `bits`, most significant first
    pub fn push_bits(&mut self, bits: u8, width: usize) {
        for shift in (0..width).rev() {
            self.push((bits >> shift) & 1 == 1);
        }
    }

    /// Append `count` spaces
    pub fn push_spaces(&mut self, count: usize) {
        for _ in 0..count {
            self.push(false);
        }
    }

    /// Read `width` modules starting at `start` as an integer, leftmost module
    /// most significant
    pub fn bits(&self, start: usize, width: usize) -> u8 {
        (start..start + width).fold(0u8, |acc, i| (acc << 1) | self.get(i) as u8)
    }

    /// Iterate over modules from left to right
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Count of bar modules
    pub fn bar_count(&self) -> usize {
        self.iter().filter(|&b| b).count()
    }
}

impl Default for ModulePattern {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Display for ModulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bar in self.iter() {
            f.write_str(if bar { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for ModulePattern {
    type Err = Error;

    /// Parse a `0`/`1` string
    fn from_str(s: &str) -> Result<Self> {
        let mut pattern = Self::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => pattern.push(false),
                '1' => pattern.push(true),
                other => {
                    return Err(Error::invalid_pattern(
                        i,
                        format!("unexpected symbol {:?}", other),
                    ));
                }
            }
        }
        Ok(pattern)
    }
}

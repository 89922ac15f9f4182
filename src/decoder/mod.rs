//! EAN-13 pattern decoding
//!
//! Inverse of the encoder: reads a 113-module pattern, checks the quiet
//! zones and guards, and recovers the 13 digits (the leading one from the
//! left-hand parity sequence).

/// Module pattern to digits
pub mod pattern;

pub use pattern::decode_module_pattern;

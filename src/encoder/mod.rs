//! EAN-13 codec
//!
//! Pure functions for turning a candidate string into a module pattern:
//! - Validation (13 ASCII digits, optional check-digit enforcement)
//! - GTIN check digit arithmetic
//! - Grouped display formatting
//! - Module pattern encoding against the fixed digit and parity tables

/// GTIN check digit computation
pub mod checksum;
/// EAN-13 module pattern encoder
pub mod ean13;
/// Grouped display formatting (`D-DDDDDD-DDDDD-D`)
pub mod format;
/// Segment widths and guard positions of the symbol
pub mod layout;
/// Digit and parity encoding tables
pub mod tables;
/// Candidate validation and check-digit policy
pub mod validate;

pub use checksum::{compute_check_digit, gtin_check_digit};
pub use ean13::encode_module_pattern;
pub use format::format_grouped;
pub use validate::{ChecksumPolicy, is_valid_ean13, validate_with_policy};

//! RustEAN - EAN-13 barcode codec and renderer
//!
//! Validates 13-digit values, computes GTIN check digits, encodes values into
//! the 113-module bar/space pattern, decodes patterns back into digits and
//! rasterizes them into grayscale bitmaps for on-screen presentation.
//!
//! Every operation is a pure function; nothing here performs I/O except the
//! explicit PNG writer.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Pattern decoding (module pattern back to digits)
pub mod decoder;
/// EAN-13 codec (validation, check digits, formatting, encoding)
pub mod encoder;
/// Error type shared by all components
pub mod error;
/// Core data structures (BarcodeValue, ModulePattern, RenderGeometry)
pub mod models;
/// Rasterization of module patterns
pub mod render;
/// Storage seam for accepted values
pub mod store;
/// Helpers for the command-line tools
pub mod tools;

pub use decoder::decode_module_pattern;
pub use encoder::{
    ChecksumPolicy, compute_check_digit, encode_module_pattern, format_grouped, gtin_check_digit,
    is_valid_ean13, validate_with_policy,
};
pub use error::{Error, Result};
pub use models::{BarcodeValue, Caption, ModulePattern, RenderGeometry};
pub use render::{Renderer, rasterize, render_value};
pub use store::{BarcodeStore, MemoryStore, StoreEvent, accept_candidate};

/// Validate, encode and rasterize a candidate string in one call
///
/// # Arguments
/// * `code` - Candidate value (13 ASCII digits)
/// * `geometry` - Rendering configuration
///
/// # Returns
/// The rendered grayscale bitmap
///
/// # Example
/// ```
/// use rust_ean::{RenderGeometry, render_code};
///
/// let img = render_code("4006381333931", &RenderGeometry::compact()).unwrap();
/// assert_eq!(img.width(), 113 * 3);
/// ```
pub fn render_code(code: &str, geometry: &RenderGeometry) -> Result<image::GrayImage> {
    let value = BarcodeValue::parse(code)?;
    render_value(&value, geometry)
}

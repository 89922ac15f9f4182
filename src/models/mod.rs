/// Validated 13-digit values
pub mod barcode;
/// Rendering geometry and caption settings
pub mod geometry;
/// Packed bar/space module rows
pub mod pattern;

pub use barcode::{BarcodeValue, EAN13_LEN};
pub use geometry::{Caption, RenderGeometry};
pub use pattern::ModulePattern;

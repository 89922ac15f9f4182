//! Barcode rasterization
//!
//! Turns module patterns into grayscale bitmaps (`image::GrayImage`):
//! - Bar drawing with optional full-height guard bars
//! - Optional caption band with the grouped digits
//! - PNG output

use std::path::Path;

use image::{GrayImage, ImageFormat};
use rayon::prelude::*;

use crate::encoder::ChecksumPolicy;
use crate::error::Result;
use crate::models::{BarcodeValue, RenderGeometry};

/// Built-in caption font
pub mod caption;
/// Pattern to bitmap rasterizer
pub mod raster;

pub use raster::{rasterize, rasterize_with_label};

/// Luma value of a bar pixel
pub const BLACK: u8 = 0;
/// Luma value of a background pixel
pub const WHITE: u8 = 255;

/// Encode and rasterize a validated value
pub fn render_value(value: &BarcodeValue, geometry: &RenderGeometry) -> Result<GrayImage> {
    let label = value.formatted();
    rasterize_with_label(&value.encode(), geometry, Some(&label))
}

/// Write a rendered barcode as PNG
pub fn write_png<P: AsRef<Path>>(img: &GrayImage, path: P) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Renderer with a fixed geometry and check-digit policy
#[derive(Debug, Clone)]
pub struct Renderer {
    geometry: RenderGeometry,
    policy: ChecksumPolicy,
}

impl Renderer {
    /// Create a renderer using environment defaults
    pub fn new() -> Self {
        Self {
            geometry: RenderGeometry::default(),
            policy: ChecksumPolicy::from_env(),
        }
    }

    /// Create a renderer with an explicit geometry
    pub fn with_geometry(geometry: RenderGeometry) -> Self {
        Self {
            geometry,
            policy: ChecksumPolicy::from_env(),
        }
    }

    /// Override the check-digit policy
    pub fn with_policy(mut self, policy: ChecksumPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Geometry in use
    pub fn geometry(&self) -> &RenderGeometry {
        &self.geometry
    }

    /// Validate, encode and rasterize a candidate string
    pub fn render(&self, code: &str) -> Result<GrayImage> {
        let value = BarcodeValue::parse_with_policy(code, self.policy)?;
        render_value(&value, &self.geometry)
    }

    /// Render many candidates in parallel; results keep input order
    pub fn render_batch(&self, codes: &[&str]) -> Vec<Result<GrayImage>> {
        codes.par_iter().map(|code| self.render(code)).collect()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

use crate::config;
use crate::error::{Error, Result};

/// Caption drawn beneath the bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    /// Height of the band reserved below the bars, in pixels
    pub band_height: u32,
    /// Gap between the bottom of the bars and the glyphs
    pub padding: u32,
}

impl Default for Caption {
    fn default() -> Self {
        Self {
            band_height: 30,
            padding: 5,
        }
    }
}

/// Rendering configuration supplied by the caller of the rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderGeometry {
    /// Width of one module in pixels
    pub module_width: u32,
    /// Height of the tallest bars in pixels
    pub bar_height: u32,
    /// How much shorter data bars are than guard bars
    pub guard_extension: u32,
    /// Draw guard bars at full height and data bars shortened
    pub extend_guards: bool,
    /// Optional caption band with the grouped digits
    pub caption: Option<Caption>,
}

impl RenderGeometry {
    /// Uniform bars with the grouped number printed underneath
    pub fn captioned() -> Self {
        Self {
            module_width: 3,
            bar_height: 120,
            guard_extension: 20,
            extend_guards: false,
            caption: Some(Caption::default()),
        }
    }

    /// Extended guard bars, no caption (the number is shown by the host UI)
    pub fn compact() -> Self {
        Self {
            module_width: 3,
            bar_height: 140,
            guard_extension: 20,
            extend_guards: true,
            caption: None,
        }
    }

    /// Set the module width
    pub fn with_module_width(mut self, module_width: u32) -> Self {
        self.module_width = module_width;
        self
    }

    /// Set the bar height
    pub fn with_bar_height(mut self, bar_height: u32) -> Self {
        self.bar_height = bar_height;
        self
    }

    /// Enable or disable guard extension
    pub fn with_extended_guards(mut self, extend: bool) -> Self {
        self.extend_guards = extend;
        self
    }

    /// Enable or disable the caption band
    pub fn with_caption(mut self, caption: Option<Caption>) -> Self {
        self.caption = caption;
        self
    }

    /// Height of data (non-guard) bars
    pub fn standard_bar_height(&self) -> u32 {
        if self.extend_guards {
            self.bar_height.saturating_sub(self.guard_extension)
        } else {
            self.bar_height
        }
    }

    /// Total canvas height including the caption band, `None` on overflow
    pub fn canvas_height(&self) -> Option<u32> {
        self.bar_height.checked_add(self.caption.map_or(0, |c| c.band_height))
    }

    /// Reject geometries that would produce an empty or degenerate raster
    pub fn validate(&self) -> Result<()> {
        if self.module_width == 0 {
            return Err(Error::invalid_geometry("module width must be positive"));
        }
        if self.bar_height == 0 {
            return Err(Error::invalid_geometry("bar height must be positive"));
        }
        if self.extend_guards && self.guard_extension >= self.bar_height {
            return Err(Error::invalid_geometry(format!(
                "guard extension {} leaves no data bar within height {}",
                self.guard_extension, self.bar_height
            )));
        }
        if let Some(caption) = self.caption {
            if caption.band_height == 0 {
                return Err(Error::invalid_geometry("caption band height must be positive"));
            }
            if caption.padding >= caption.band_height {
                return Err(Error::invalid_geometry("caption padding exceeds band height"));
            }
        }
        if self.canvas_height().is_none() {
            return Err(Error::invalid_geometry(format!(
                "bar height {} plus caption band overflows the canvas height",
                self.bar_height
            )));
        }
        Ok(())
    }
}

impl Default for RenderGeometry {
    /// Compact layout with dimensions taken from the environment
    fn default() -> Self {
        Self {
            module_width: config::module_width(),
            bar_height: config::bar_height(),
            guard_extension: config::guard_extension(),
            extend_guards: true,
            caption: None,
        }
    }
}

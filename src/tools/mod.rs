//! Helpers shared by the command-line tools

use crate::encoder::layout;
use crate::models::{Caption, ModulePattern, RenderGeometry};

/// Command-line adjustments applied on top of a base geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryOverrides {
    /// Replace the module width.
    pub module_width: Option<u32>,
    /// Replace the bar height.
    pub bar_height: Option<u32>,
    /// Force a caption band on.
    pub caption: bool,
    /// Draw all bars at the same height.
    pub no_guard_extension: bool,
}

impl GeometryOverrides {
    /// Apply the overrides to `base`.
    pub fn apply(&self, base: RenderGeometry) -> RenderGeometry {
        let mut geometry = base;
        if let Some(width) = self.module_width {
            geometry = geometry.with_module_width(width);
        }
        if let Some(height) = self.bar_height {
            geometry = geometry.with_bar_height(height);
        }
        if self.caption && geometry.caption.is_none() {
            geometry = geometry.with_caption(Some(Caption::default()));
        }
        if self.no_guard_extension {
            geometry = geometry.with_extended_guards(false);
        }
        geometry
    }
}

/// Summary statistics for a module pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternStats {
    /// Total modules.
    pub modules: usize,
    /// Bar modules.
    pub bars: usize,
    /// Distinct bars (runs of adjacent bar modules).
    pub bar_runs: usize,
    /// Ratio of bar modules to total modules.
    pub bar_ratio: f64,
}

/// Compute bar counts for a pattern.
pub fn pattern_stats(pattern: &ModulePattern) -> PatternStats {
    let mut bars = 0usize;
    let mut bar_runs = 0usize;
    let mut previous = false;
    for bar in pattern.iter() {
        if bar {
            bars += 1;
            if !previous {
                bar_runs += 1;
            }
        }
        previous = bar;
    }
    let modules = pattern.len();
    let bar_ratio = if modules == 0 {
        0.0
    } else {
        bars as f64 / modules as f64
    };
    PatternStats {
        modules,
        bars,
        bar_runs,
        bar_ratio,
    }
}

/// One-line terminal preview: `█` for bars, space for spaces, `|` under guards.
pub fn ascii_preview(pattern: &ModulePattern) -> String {
    let bars: String = pattern
        .iter()
        .map(|bar| if bar { '█' } else { ' ' })
        .collect();
    if pattern.len() != layout::TOTAL_MODULES {
        return bars;
    }
    let markers: String = (0..pattern.len())
        .map(|i| if layout::is_guard(i) { '|' } else { ' ' })
        .collect();
    format!("{}\n{}", bars, markers.trim_end())
}

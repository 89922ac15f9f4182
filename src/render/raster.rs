use image::{GrayImage, Luma};
use rayon::prelude::*;
use tracing::debug;

use super::caption::draw_caption;
use super::{BLACK, WHITE};
use crate::decoder::decode_module_pattern;
use crate::encoder::layout::{self, TOTAL_MODULES};
use crate::error::{Error, Result};
use crate::models::{ModulePattern, RenderGeometry};

/// Rasterize a module pattern into an 8-bit grayscale bitmap
///
/// Canvas width is `pattern.len() * module_width`; height is `bar_height`
/// plus the caption band when one is configured. With `extend_guards`, bars
/// inside the start/middle/end guards are drawn at full height and data bars
/// `guard_extension` pixels shorter. Guard positions only exist for the
/// 113-module EAN-13 layout; any other pattern is drawn with uniform bars.
///
/// When the geometry asks for a caption, the pattern is decoded and its
/// grouped form printed beneath the bars.
pub fn rasterize(pattern: &ModulePattern, geometry: &RenderGeometry) -> Result<GrayImage> {
    let label = match geometry.caption {
        Some(_) => Some(decode_module_pattern(pattern)?.formatted()),
        None => None,
    };
    rasterize_with_label(pattern, geometry, label.as_deref())
}

/// Rasterize with an explicit caption text (ignored when the geometry has no
/// caption band)
pub fn rasterize_with_label(
    pattern: &ModulePattern,
    geometry: &RenderGeometry,
    label: Option<&str>,
) -> Result<GrayImage> {
    if pattern.is_empty() {
        return Err(Error::invalid_input("cannot rasterize an empty pattern"));
    }
    geometry.validate()?;

    let module_width = geometry.module_width as usize;
    let width = u32::try_from(pattern.len())
        .ok()
        .and_then(|len| len.checked_mul(geometry.module_width))
        .ok_or_else(|| Error::invalid_geometry("canvas width overflows"))?;
    let height = geometry
        .canvas_height()
        .ok_or_else(|| Error::invalid_geometry("canvas height overflows"))?;
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_geometry("canvas area overflows"))?;

    let column_heights = bar_heights(pattern, geometry);

    let mut img = GrayImage::from_pixel(width, height, Luma([WHITE]));
    let row_len = width as usize;
    let bar_rows = geometry.bar_height as usize;

    // Process bar rows in parallel; each row only reads the shared column table
    let bars: &mut [u8] = &mut img;
    bars[..row_len * bar_rows]
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (i, &h) in column_heights.iter().enumerate() {
                if (y as u32) < h {
                    row[i * module_width..(i + 1) * module_width].fill(BLACK);
                }
            }
        });

    if let (Some(caption), Some(text)) = (geometry.caption, label) {
        let top = geometry.bar_height + caption.padding;
        draw_caption(&mut img, text, top, caption.band_height - caption.padding)?;
    }

    debug!(
        width,
        height,
        bars = pattern.bar_count(),
        caption = label.is_some() && geometry.caption.is_some(),
        "rasterized pattern"
    );
    Ok(img)
}

/// Height in pixels of each module's bar (0 for spaces)
fn bar_heights(pattern: &ModulePattern, geometry: &RenderGeometry) -> Vec<u32> {
    let has_guards = geometry.extend_guards && pattern.len() == TOTAL_MODULES;
    pattern
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            if !bar {
                0
            } else if has_guards && !layout::is_guard(i) {
                geometry.standard_bar_height()
            } else {
                geometry.bar_height
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_module_pattern;
    use crate::models::Caption;

    fn column_is_black(img: &GrayImage, x: u32, y: u32) -> bool {
        img.get_pixel(x, y)[0] == BLACK
    }

    #[test]
    fn test_dimensions() {
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let img = rasterize(&pattern, &RenderGeometry::compact()).unwrap();
        assert_eq!(img.width(), 113 * 3);
        assert_eq!(img.height(), 140);

        let img = rasterize(&pattern, &RenderGeometry::captioned()).unwrap();
        assert_eq!(img.width(), 113 * 3);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn test_guard_bars_extend() {
        let geometry = RenderGeometry::compact();
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let img = rasterize(&pattern, &geometry).unwrap();
        let last_row = geometry.bar_height - 1;
        let mw = geometry.module_width;

        // start guard bar at module 11, end guard bar at 105
        assert!(column_is_black(&img, 11 * mw, last_row));
        assert!(column_is_black(&img, 105 * mw, last_row));
        // middle guard bars at 57 and 59
        assert!(column_is_black(&img, 57 * mw, last_row));
        assert!(column_is_black(&img, 59 * mw, last_row));

        // first data bar: left digit 0 (odd) = 0001101 -> bar at module 17
        assert!(column_is_black(&img, 17 * mw, 0));
        assert!(column_is_black(&img, 17 * mw, geometry.standard_bar_height() - 1));
        assert!(!column_is_black(&img, 17 * mw, geometry.standard_bar_height()));
    }

    #[test]
    fn test_uniform_bars_without_extension() {
        let geometry = RenderGeometry::compact().with_extended_guards(false);
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let img = rasterize(&pattern, &geometry).unwrap();
        assert!(column_is_black(&img, 17 * 3, geometry.bar_height - 1));
    }

    #[test]
    fn test_only_black_and_white_without_caption() {
        let pattern = encode_module_pattern("5901234123457").unwrap();
        let img = rasterize(&pattern, &RenderGeometry::compact()).unwrap();
        assert!(img.pixels().all(|p| p[0] == BLACK || p[0] == WHITE));
        // quiet zone stays white
        assert!(!column_is_black(&img, 0, 0));
        assert!(!column_is_black(&img, img.width() - 1, 0));
    }

    #[test]
    fn test_caption_drawn_in_band() {
        let geometry = RenderGeometry::captioned();
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let img = rasterize(&pattern, &geometry).unwrap();
        let band_top = geometry.bar_height;
        let inked = (band_top..img.height())
            .flat_map(|y| (0..img.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| column_is_black(&img, x, y))
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn test_caption_needs_ean_layout() {
        let pattern: ModulePattern = "0101".parse().unwrap();
        let geometry = RenderGeometry::captioned();
        assert!(rasterize(&pattern, &geometry).is_err());
        // without a caption any pattern can be drawn
        let img = rasterize(&pattern, &geometry.with_caption(None)).unwrap();
        assert_eq!(img.width(), 12);
    }

    #[test]
    fn test_rejects_overflowing_caption_band() {
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let geometry = RenderGeometry::captioned().with_bar_height(u32::MAX - 10);
        let err = rasterize(&pattern, &geometry).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { .. }));
    }

    #[test]
    fn test_rejects_empty_pattern() {
        let err = rasterize(&ModulePattern::default(), &RenderGeometry::compact()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let pattern = encode_module_pattern("4006381333931").unwrap();
        let geometry = RenderGeometry::compact().with_module_width(0);
        assert!(matches!(
            rasterize(&pattern, &geometry),
            Err(Error::InvalidGeometry { .. })
        ));

        let tiny_band = RenderGeometry::captioned().with_caption(Some(Caption {
            band_height: 4,
            padding: 1,
        }));
        assert!(matches!(
            rasterize(&pattern, &tiny_band),
            Err(Error::InvalidGeometry { .. })
        ));
    }
}

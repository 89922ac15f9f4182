//! Bitmap digit font for the caption band
//!
//! Glyphs are 5x7 cells, one byte per row, bit 4 = leftmost column.
//! Only the characters of the grouped display form are provided.

use image::{GrayImage, Luma};

use crate::error::{Error, Result};

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs
const GLYPH_SPACING: u32 = 1;
const ADVANCE: u32 = GLYPH_WIDTH + GLYPH_SPACING;

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const HYPHEN: [u8; 7] = [0, 0, 0, 0b11111, 0, 0, 0];

fn glyph(c: char) -> Option<&'static [u8; 7]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        '-' => Some(&HYPHEN),
        _ => None,
    }
}

/// Pixel width of `text` at `scale`, without trailing spacing
pub(crate) fn text_width(chars: usize, scale: u32) -> u32 {
    if chars == 0 {
        return 0;
    }
    (chars as u32 * ADVANCE - GLYPH_SPACING) * scale
}

/// Largest integer scale at which `chars` glyphs fit in `width` x `height`
pub(crate) fn fit_scale(chars: usize, width: u32, height: u32) -> u32 {
    let by_height = height / GLYPH_HEIGHT;
    let by_width = width / text_width(chars, 1).max(1);
    by_height.min(by_width)
}

/// Draw `text` horizontally centred, glyph tops at `top`, within `height` rows
pub(crate) fn draw_caption(img: &mut GrayImage, text: &str, top: u32, height: u32) -> Result<()> {
    let glyphs = text
        .chars()
        .map(|c| {
            glyph(c).ok_or_else(|| {
                Error::invalid_input(format!("caption character {:?} has no glyph", c))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let scale = fit_scale(glyphs.len(), img.width(), height);
    if scale == 0 {
        return Err(Error::invalid_geometry(format!(
            "caption band {}x{} too small for {} glyphs",
            img.width(),
            height,
            glyphs.len()
        )));
    }

    let left = (img.width() - text_width(glyphs.len(), scale)) / 2;
    for (n, rows) in glyphs.iter().enumerate() {
        let x0 = left + n as u32 * ADVANCE * scale;
        for (gy, &bits) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - gx)) & 1 == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(
                            x0 + gx * scale + dx,
                            top + gy as u32 * scale + dy,
                            Luma([super::BLACK]),
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

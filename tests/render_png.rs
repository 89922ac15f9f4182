//! Integration tests for rendering barcodes to PNG
//!
//! Renders through the public API, writes the bitmap with the `image` crate,
//! reads it back and scans the middle row to recover the module pattern.

use image::GrayImage;
use rust_ean::render::{BLACK, write_png};
use rust_ean::{
    ModulePattern, RenderGeometry, Renderer, decode_module_pattern, encode_module_pattern,
    render_code,
};

/// Sample one pixel per module along row `y`
fn scan_row(img: &GrayImage, y: u32, module_width: u32) -> ModulePattern {
    let mut pattern = ModulePattern::with_capacity((img.width() / module_width) as usize);
    let mut x = module_width / 2;
    while x < img.width() {
        pattern.push(img.get_pixel(x, y)[0] == BLACK);
        x += module_width;
    }
    pattern
}

fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rust_ean_{}_{}.png", name, std::process::id()))
}

#[test]
fn test_png_roundtrip_scans_back() {
    let geometry = RenderGeometry::compact();
    let img = render_code("5901234123457", &geometry).unwrap();

    let path = temp_png("roundtrip");
    write_png(&img, &path).unwrap();
    let loaded = image::open(&path).expect("Failed to load image").to_luma8();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.dimensions(), (113 * 3, 140));

    // upper rows cover every bar, guard or not
    let scanned = scan_row(&loaded, 10, geometry.module_width);
    assert_eq!(scanned, encode_module_pattern("5901234123457").unwrap());
    assert_eq!(
        decode_module_pattern(&scanned).unwrap().to_string(),
        "5901234123457"
    );
}

#[test]
fn test_lower_rows_show_only_guards() {
    let geometry = RenderGeometry::compact();
    let img = render_code("4006381333931", &geometry).unwrap();
    let low = scan_row(&img, geometry.bar_height - 1, geometry.module_width);
    let expected: String = (0..113)
        .map(|i| match i {
            11 | 13 | 57 | 59 | 103 | 105 => '1',
            _ => '0',
        })
        .collect();
    assert_eq!(low.to_string(), expected);
}

#[test]
fn test_captioned_variant() {
    let geometry = RenderGeometry::captioned();
    let img = Renderer::with_geometry(geometry)
        .render("0123456789012")
        .unwrap();
    assert_eq!(img.height(), 150);

    // all bars share one height when guards are not extended
    let low = scan_row(&img, geometry.bar_height - 1, geometry.module_width);
    assert_eq!(low, encode_module_pattern("0123456789012").unwrap());

    // caption band carries ink, the padding strip does not
    let padding_row = geometry.bar_height + 1;
    assert!((0..img.width()).all(|x| img.get_pixel(x, padding_row)[0] != BLACK));
    let band_ink = (geometry.bar_height..img.height())
        .flat_map(|y| (0..img.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| img.get_pixel(x, y)[0] == BLACK)
        .count();
    assert!(band_ink > 0);
}

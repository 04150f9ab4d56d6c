//! Assertion helpers for tests.

use image::RgbImage;
use pretty_assertions::assert_eq;
use std::path::Path;

use super::fixtures::PANEL_COLORS;

/// Assert every pixel is one of the 7 panel colors
pub fn assert_panel_colors_only(image: &RgbImage) {
    for (x, y, pixel) in image.enumerate_pixels() {
        assert!(
            PANEL_COLORS.contains(&pixel.0),
            "Pixel ({x}, {y}) is {:?}, not a panel color",
            pixel.0
        );
    }
}

/// Open an output file and check its size and colors
pub fn assert_dithered_file(path: &Path, width: u32, height: u32) -> RgbImage {
    assert!(path.exists(), "Expected output file {}", path.display());
    let image = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()))
        .into_rgb8();
    assert_eq!(
        image.dimensions(),
        (width, height),
        "Unexpected size for {}",
        path.display()
    );
    assert_panel_colors_only(&image);
    image
}

/// File names (not paths) in a directory, sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("output dir should be readable")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

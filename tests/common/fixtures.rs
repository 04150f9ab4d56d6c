//! Test fixtures and constants.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// The 7 panel colors, in palette order
pub const PANEL_COLORS: [[u8; 3]; 7] = [
    [0, 0, 0],
    [255, 255, 255],
    [0, 255, 0],
    [0, 0, 255],
    [255, 0, 0],
    [255, 255, 0],
    [255, 128, 0],
];

/// A 16:9 frame with a smooth color ramp, the kind of content that
/// exercises error diffusion
pub fn gradient_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    })
}

/// A frame made of vertical stripes of panel colors
pub fn stripes_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        Rgb(PANEL_COLORS[(x as usize * PANEL_COLORS.len()) / width as usize])
    })
}

/// Save `image` as `name` inside `dir` and return the path
pub fn write_image(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("fixture image should save");
    path
}

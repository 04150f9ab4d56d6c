//! Center cropping.

use image::{imageops, RgbImage};

/// A rectangular region of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Left edge (inclusive).
    pub x: u32,
    /// Top edge (inclusive).
    pub y: u32,
    /// Width of the region.
    pub width: u32,
    /// Height of the region.
    pub height: u32,
}

/// Compute the centered crop of a `width` x `height` image.
///
/// The center is `(width / 2, height / 2)` and the half extents are
/// `(target_width / 2, target_height / 2)`, all with integer truncation.
/// The window spans `[mid - half, mid + half)` on each axis, so an odd
/// target dimension yields a window one pixel short of the target.
///
/// Bounds are clamped to the image.
///
/// # Example
///
/// ```
/// use epaper_dither::{crop_window, CropWindow};
///
/// let window = crop_window(853, 480, 800, 480);
/// assert_eq!(window, CropWindow { x: 26, y: 0, width: 800, height: 480 });
///
/// // Odd targets lose one pixel
/// let window = crop_window(853, 480, 801, 479);
/// assert_eq!((window.width, window.height), (800, 478));
/// ```
pub fn crop_window(width: u32, height: u32, target_width: u32, target_height: u32) -> CropWindow {
    let (x, w) = span(width, target_width);
    let (y, h) = span(height, target_height);
    CropWindow {
        x,
        y,
        width: w,
        height: h,
    }
}

fn span(extent: u32, target: u32) -> (u32, u32) {
    let mid = extent / 2;
    let half = target / 2;
    let start = mid.saturating_sub(half);
    let end = mid.saturating_add(half).min(extent);
    (start, end - start)
}

/// Copy the centered window of `image` into a new buffer.
pub fn center_crop(image: &RgbImage, target_width: u32, target_height: u32) -> RgbImage {
    let window = crop_window(image.width(), image.height(), target_width, target_height);
    imageops::crop_imm(image, window.x, window.y, window.width, window.height).to_image()
}

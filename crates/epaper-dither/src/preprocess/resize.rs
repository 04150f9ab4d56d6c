//! Cover scaling.
//!
//! The source is scaled, preserving its aspect ratio, so that it fully
//! covers the target box. The overflowing dimension is cropped afterwards.

use image::{imageops, RgbImage};

use super::options::ResizeFilter;

/// Compute the scaled size that covers a `target_width` x `target_height` box.
///
/// If the source is relatively taller than the target (its width/height
/// ratio is less than or equal to the target's), the width is pinned to
/// the target width and the height follows the source ratio. Otherwise the
/// height is pinned. The free dimension is rounded to the nearest integer
/// (halfway cases away from zero) and never drops below 1.
///
/// All inputs must be non-zero.
///
/// # Example
///
/// ```
/// use epaper_dither::cover_dimensions;
///
/// // 16:9 source into a 5:3 box: height is pinned, width overflows
/// assert_eq!(cover_dimensions(1920, 1080, 800, 480), (853, 480));
/// // Portrait source: width is pinned, height overflows
/// assert_eq!(cover_dimensions(480, 800, 800, 480), (800, 1333));
/// ```
pub fn cover_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    let source_ratio = f64::from(source_width) / f64::from(source_height);
    let target_ratio = f64::from(target_width) / f64::from(target_height);

    if source_ratio <= target_ratio {
        let height = (f64::from(target_width) / source_ratio).round();
        (target_width, to_dimension(height))
    } else {
        let width = (f64::from(target_height) * source_ratio).round();
        (to_dimension(width), target_height)
    }
}

fn to_dimension(value: f64) -> u32 {
    if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (value as u32).max(1)
    }
}

/// Scale `image` with `filter` so it covers the target box.
///
/// Returns a copy of the source when it already has the cover size.
pub fn resize_to_cover(
    image: &RgbImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> RgbImage {
    let (width, height) =
        cover_dimensions(image.width(), image.height(), target_width, target_height);

    if (width, height) == image.dimensions() {
        return image.clone();
    }

    imageops::resize(image, width, height, filter.filter_type())
}

//! Geometric normalization of frames to the panel size.
//!
//! [`resize_and_crop`] scales a frame, preserving aspect ratio, until it
//! covers the target box, then cuts the centered target-sized window out of
//! the scaled image:
//!
//! 1. **Cover scale** ([`cover_dimensions`]) - pin the dimension that would
//!    otherwise fall short, round the other one
//! 2. **Resample** - `image::imageops::resize` with the chosen [`ResizeFilter`]
//! 3. **Center crop** ([`crop_window`]) - truncated center and half extents
//!
//! # Example
//!
//! ```
//! use epaper_dither::{resize_and_crop, ResizeFilter};
//! use image::{Rgb, RgbImage};
//!
//! let frame = RgbImage::from_pixel(1920, 1080, Rgb([0, 0, 255]));
//! let panel = resize_and_crop(&frame, 800, 480, ResizeFilter::default()).unwrap();
//! assert_eq!(panel.dimensions(), (800, 480));
//! ```

mod crop;
mod error;
mod options;
mod resize;

pub use crop::{center_crop, crop_window, CropWindow};
pub use error::ResizeError;
pub use options::{ParseFilterError, ResizeFilter};
pub use resize::{cover_dimensions, resize_to_cover};

use image::RgbImage;

/// Smallest target extent whose half-extent crop is non-empty
const MIN_TARGET: u32 = 2;

/// Scale `image` to cover `target_width` x `target_height`, then center-crop.
///
/// For even targets the result has exactly the target size. For an odd
/// target dimension `t` the result is `2 * (t / 2)` pixels along that axis.
///
/// # Errors
///
/// - [`ResizeError::InvalidTarget`] if either target dimension is below 2
/// - [`ResizeError::EmptySource`] if `image` has no pixels
pub fn resize_and_crop(
    image: &RgbImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<RgbImage, ResizeError> {
    if target_width < MIN_TARGET || target_height < MIN_TARGET {
        return Err(ResizeError::InvalidTarget {
            width: target_width,
            height: target_height,
        });
    }
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ResizeError::EmptySource { width, height });
    }

    let scaled = resize_to_cover(image, target_width, target_height, filter);
    Ok(center_crop(&scaled, target_width, target_height))
}

//! Error diffusion dithering.
//!
//! Quantizes RGB pixels to palette indices with Floyd-Steinberg error
//! diffusion. Pixels are visited in a plain raster scan (left-to-right, then
//! top-to-bottom) with no serpentine reversal.
//!
//! # Example
//!
//! ```
//! use epaper_dither::{Dither, FloydSteinberg, Palette, Srgb};
//!
//! let palette = Palette::seven_color();
//! let pixels = [Srgb::from_u8(10, 10, 10), Srgb::from_u8(250, 250, 250)];
//!
//! let indices = FloydSteinberg.dither(&pixels, 2, 1, &palette);
//! assert_eq!(indices, vec![0, 1]); // black, white
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::Srgb;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette color
/// 2. Compute the quantization error (desired - actual)
/// 3. Distribute that error to neighboring unprocessed pixels
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither an image to palette indices.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels (row-major order)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Color palette for quantization
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` of palette indices, one per pixel, in row-major order.
    /// Each index is in the range `0..palette.len()`.
    fn dither(&self, image: &[Srgb], width: usize, height: usize, palette: &Palette) -> Vec<u8>;
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`). The working
/// value of a pixel is its source value plus the accumulated error stored
/// here, so no full-image float copy is needed.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `row_depth` - Number of rows to track (kernel's `max_dy + 1`)
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Get accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// `row_offset` is relative to the current row (0 = current row).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a new zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        // Rotate left: [0,1] -> [1,0]
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Clamp a working channel value to the valid 0..=255 range.
///
/// Accumulated error can push a working value outside the channel range;
/// it is clamped whenever it is read.
#[inline]
pub(crate) fn clamp_channel(value: f32) -> f32 {
    value.clamp(0.0, 255.0)
}

/// Core error diffusion loop parameterized by kernel.
///
/// For each pixel in raster order the working value (source plus
/// accumulated error, clamped) is matched against the palette, and the
/// difference between the working value and the chosen color is spread
/// over the kernel's neighbors. Neighbors outside the image are skipped.
///
/// A zero-width or zero-height image yields an empty index vector.
pub(crate) fn dither_with_kernel(
    image: &[Srgb],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<u8> {
    debug_assert_eq!(
        image.len(),
        width * height,
        "pixel count ({}) must match width * height ({}x{})",
        image.len(),
        width,
        height,
    );

    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;

            let source = image[idx].to_f32();
            let accumulated = error_buf.get_accumulated(x);
            let pixel = [
                clamp_channel(source[0] + accumulated[0]),
                clamp_channel(source[1] + accumulated[1]),
                clamp_channel(source[2] + accumulated[2]),
            ];

            let (nearest_idx, dist) = palette.find_nearest(pixel);
            output[idx] = nearest_idx as u8;

            // Exact hit: nothing to diffuse
            if dist == 0.0 {
                continue;
            }

            let nearest = palette.color(nearest_idx).to_f32();
            let error = [
                pixel[0] - nearest[0],
                pixel[1] - nearest[1],
                pixel[2] - nearest[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 || nx as usize >= width {
                    continue;
                }
                if y + dy as usize >= height {
                    continue;
                }
                let w = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * w, error[1] * w, error[2] * w],
                );
            }
        }

        error_buf.advance_row();
    }

    output
}

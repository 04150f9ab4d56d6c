//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::color::Srgb;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic error diffusion algorithm, distributing 100% of quantization
/// error to 4 neighboring pixels.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Rows are always scanned left-to-right.
///
/// # Example
///
/// ```
/// use epaper_dither::{Dither, FloydSteinberg, Palette, Srgb};
///
/// let palette = Palette::seven_color();
/// let pixels = vec![Srgb::from_u8(255, 128, 0); 4];
/// let indices = FloydSteinberg.dither(&pixels, 2, 2, &palette);
/// assert_eq!(indices, vec![6; 4]); // all orange
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &[Srgb], width: usize, height: usize, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(image, width, height, palette, &FLOYD_STEINBERG)
    }
}

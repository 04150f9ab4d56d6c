//! DitheredImage: palette indices plus the palette they refer to.
//!
//! The indexed form is canonical; RGB renderings are computed on demand by
//! looking up palette colors, so they can only ever contain palette colors.

use image::{Rgb, RgbImage};

use crate::palette::Palette;

/// The output of the dithering stage.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette used for dithering.
///
/// - [`indices()`](DitheredImage::indices): raw palette indices, for indexed
///   encoders
/// - [`to_rgb()`](DitheredImage::to_rgb): flat `[R, G, B, ...]` bytes
/// - [`to_rgb_image()`](DitheredImage::to_rgb_image): an [`RgbImage`] ready
///   for `image` encoders
///
/// # Example
///
/// ```
/// use epaper_dither::{DitheredImage, Palette};
///
/// let image = DitheredImage::new(vec![0, 1, 1, 0], 2, 2, Palette::seven_color());
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.to_rgb()[..6], [0, 0, 0, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitheredImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl DitheredImage {
    /// Create a new `DitheredImage` from dithered palette indices.
    ///
    /// Each index must be in `0..palette.len()`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: u32, height: u32, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Convert to RGB bytes.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Render into an [`RgbImage`] whose every pixel is a palette color.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let idx = self.indices[y as usize * width + x as usize];
            Rgb(self.palette.color(idx as usize).to_bytes())
        })
    }
}

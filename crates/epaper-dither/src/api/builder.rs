//! EpaperDitherer builder, the primary entry point for the crate.
//!
//! [`EpaperDitherer`] wraps resize-and-crop and Floyd-Steinberg dithering
//! behind a fluent configuration API.

use image::RgbImage;

use crate::color::Srgb;
use crate::dither::{Dither, FloydSteinberg};
use crate::output::DitheredImage;
use crate::palette::Palette;
use crate::preprocess::{resize_and_crop, ResizeError, ResizeFilter};

/// High-level frame converter for e-paper panels.
///
/// - Configuration methods consume and return `self`
/// - [`process()`](Self::process) takes `&self`, so one builder serves every
///   frame of a run
///
/// # Example
///
/// ```
/// use epaper_dither::{EpaperDitherer, Palette, ResizeFilter};
/// use image::{Rgb, RgbImage};
///
/// let ditherer = EpaperDitherer::new(Palette::seven_color())
///     .resize(8, 6)
///     .filter(ResizeFilter::Nearest);
///
/// let frame = RgbImage::from_pixel(32, 18, Rgb([0, 0, 255]));
/// let result = ditherer.process(&frame).unwrap();
///
/// assert_eq!(result.dimensions(), (8, 6));
/// assert!(result.indices().iter().all(|&i| i == 3)); // blue
/// ```
#[derive(Debug, Clone)]
pub struct EpaperDitherer {
    palette: Palette,
    target: Option<(u32, u32)>,
    filter: ResizeFilter,
}

impl EpaperDitherer {
    /// Create a new ditherer with the given palette.
    ///
    /// No resize target is set: frames are dithered at their own size.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            target: None,
            filter: ResizeFilter::default(),
        }
    }

    /// Set target dimensions for resize-and-crop.
    #[inline]
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.target = Some((width, height));
        self
    }

    /// Set the resampling filter.
    #[inline]
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The palette frames are quantized to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resize-and-crop `frame` to the configured target (if any), then dither.
    ///
    /// # Errors
    ///
    /// Returns a [`ResizeError`] if a target is set and the frame cannot be
    /// resized to it. Dithering itself cannot fail.
    pub fn process(&self, frame: &RgbImage) -> Result<DitheredImage, ResizeError> {
        match self.target {
            Some((width, height)) => {
                let resized = resize_and_crop(frame, width, height, self.filter)?;
                Ok(self.dither(&resized))
            }
            None => Ok(self.dither(frame)),
        }
    }

    /// Dither `frame` at its own size.
    pub fn dither(&self, frame: &RgbImage) -> DitheredImage {
        let (width, height) = frame.dimensions();
        let pixels: Vec<Srgb> = frame.pixels().map(|&p| Srgb::from(p)).collect();
        let indices = FloydSteinberg.dither(
            &pixels,
            width as usize,
            height as usize,
            &self.palette,
        );
        DitheredImage::new(indices, width, height, self.palette.clone())
    }
}

impl Default for EpaperDitherer {
    fn default() -> Self {
        Self::new(Palette::seven_color())
    }
}

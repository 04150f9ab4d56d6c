//! Palette struct with nearest-color matching.
//!
//! The only palette the pipeline ships with is [`SEVEN_COLOR`], the color
//! set of 7-color ACeP / Spectra e-paper panels. [`Palette::new`] validates
//! arbitrary color lists so smaller palettes can be built for tests.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Srgb;

/// The fixed 7-color e-paper palette, in tie-breaking order.
///
/// When two entries are equally close to a pixel, the one listed first wins.
pub const SEVEN_COLOR: [Srgb; 7] = [
    Srgb::from_u8(0, 0, 0),       // black
    Srgb::from_u8(255, 255, 255), // white
    Srgb::from_u8(0, 255, 0),     // green
    Srgb::from_u8(0, 0, 255),     // blue
    Srgb::from_u8(255, 0, 0),     // red
    Srgb::from_u8(255, 255, 0),   // yellow
    Srgb::from_u8(255, 128, 0),   // orange
];

/// An ordered color palette with nearest-color search.
///
/// Channel values are converted to `f32` once at construction time so the
/// per-pixel search in the dither loop does no conversions.
///
/// # Example
///
/// ```
/// use epaper_dither::{Palette, Srgb};
///
/// let palette = Palette::seven_color();
/// assert_eq!(palette.len(), 7);
///
/// // Dark grey is closest to black
/// let (idx, _) = palette.find_nearest([30.0, 30.0, 30.0]);
/// assert_eq!(palette.color(idx), Srgb::from_u8(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb>,
    // Precomputed 0.0..=255.0 channel values, parallel to `colors`
    channels: Vec<[f32; 3]>,
}

impl Palette {
    /// Create a new palette from sRGB colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has more than 256 entries ([`PaletteError::TooManyColors`])
    /// - `colors` contains the same color twice ([`PaletteError::DuplicateColor`])
    ///
    /// # Example
    ///
    /// ```
    /// use epaper_dither::{Palette, Srgb};
    ///
    /// let colors = [Srgb::from_u8(0, 0, 0), Srgb::from_u8(255, 255, 255)];
    /// let palette = Palette::new(&colors).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn new(colors: &[Srgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > usize::from(u8::MAX) + 1 {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.to_bytes()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            channels: colors.iter().map(|c| c.to_f32()).collect(),
        })
    }

    /// The fixed 7-color e-paper palette ([`SEVEN_COLOR`]).
    pub fn seven_color() -> Self {
        Self {
            colors: SEVEN_COLOR.to_vec(),
            channels: SEVEN_COLOR.iter().map(|c| c.to_f32()).collect(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Srgb {
        self.colors[idx]
    }

    /// All palette colors in order.
    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Index of an exact palette color, if present.
    pub fn index_of(&self, color: Srgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Find the nearest palette color to a working pixel value.
    ///
    /// `pixel` holds channel values on the 0.0..=255.0 scale; callers are
    /// responsible for clamping accumulated error before the lookup.
    /// Distance is squared Euclidean RGB distance. On ties the earliest
    /// palette entry wins (strict `<` comparison).
    ///
    /// Returns `(index, squared_distance)`.
    #[inline]
    pub fn find_nearest(&self, pixel: [f32; 3]) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, c) in self.channels.iter().enumerate() {
            let dr = c[0] - pixel[0];
            let dg = c[1] - pixel[1];
            let db = c[2] - pixel[2];
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::seven_color()
    }
}

//! 8-bit sRGB color type
//!
//! Pixels and palette entries are stored as gamma-encoded 8-bit triples.
//! Quantization works directly on these values: distances are plain RGB
//! distances and error diffusion happens on the 0..=255 channel scale.

use image::Rgb;

/// A color in 8-bit sRGB space.
///
/// This is the storage type for both image pixels and palette entries.
/// Arithmetic (error accumulation, distance) is done on the `[f32; 3]`
/// returned by [`Srgb::to_f32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use epaper_dither::Srgb;
    /// let orange = Srgb::from_u8(255, 128, 0);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel values as floats on the 0.0..=255.0 scale.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Squared Euclidean distance between this color and a working value.
    ///
    /// The working value is expected to already be clamped to the channel
    /// range. Squared distance orders candidates identically to the true
    /// Euclidean distance, so no square root is taken.
    ///
    /// # Example
    /// ```
    /// use epaper_dither::Srgb;
    /// let black = Srgb::from_u8(0, 0, 0);
    /// assert_eq!(black.distance_squared([3.0, 4.0, 0.0]), 25.0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: [f32; 3]) -> f32 {
        let [r, g, b] = self.to_f32();
        let dr = r - other[0];
        let dg = g - other[1];
        let db = b - other[2];
        dr * dr + dg * dg + db * db
    }
}

impl From<Rgb<u8>> for Srgb {
    #[inline]
    fn from(pixel: Rgb<u8>) -> Self {
        Self::from_bytes(pixel.0)
    }
}

impl From<Srgb> for Rgb<u8> {
    #[inline]
    fn from(color: Srgb) -> Self {
        Rgb(color.to_bytes())
    }
}

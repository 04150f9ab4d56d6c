//! Color type used for pixels and palette entries
//!
//! # Example
//!
//! ```
//! use epaper_dither::Srgb;
//!
//! let pixel = Srgb::from_u8(128, 64, 32);
//! assert_eq!(pixel.to_bytes(), [128, 64, 32]);
//! ```

mod srgb;

pub use srgb::Srgb;

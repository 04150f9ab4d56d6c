//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] stores palette indices with dimension metadata and an
//! owned [`Palette`](crate::palette::Palette). Encoders pick whichever form
//! suits them: raw indices for indexed formats, RGB for everything else.

mod dithered_image;

pub use dithered_image::DitheredImage;

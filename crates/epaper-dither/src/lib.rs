#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! epaper-dither: frame normalization and dithering for 7-color e-paper
//!
//! This library turns arbitrary RGB frames into panel-sized images that
//! contain only the colors a 7-color e-paper display can show.
//!
//! # Quick Start
//!
//! The [`EpaperDitherer`] builder is the primary entry point:
//!
//! ```
//! use epaper_dither::{EpaperDitherer, Palette, Srgb};
//! use image::{Rgb, RgbImage};
//!
//! let ditherer = EpaperDitherer::new(Palette::seven_color()).resize(800, 480);
//!
//! let frame = RgbImage::from_pixel(1280, 720, Rgb([90, 140, 200]));
//! let result = ditherer.process(&frame).unwrap();
//!
//! assert_eq!(result.dimensions(), (800, 480));
//! let panel = result.to_rgb_image();
//! assert!(panel
//!     .pixels()
//!     .all(|p| Palette::seven_color().index_of(Srgb::from(*p)).is_some()));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbImage (any size)
//!     |
//!     v
//! resize_and_crop()        cover scale + center crop
//!     |
//!     v
//! FloydSteinberg.dither()  raster scan, RGB distance, 7/3/5/1 diffusion
//!     |
//!     v
//! DitheredImage            palette indices + palette
//! ```
//!
//! # Color Matching
//!
//! Nearest-color search uses plain squared Euclidean distance on 8-bit sRGB
//! channel values. Accumulated error is kept in `f32` and clamped to
//! `0..=255` before each lookup. Ties go to the palette entry listed first
//! in [`SEVEN_COLOR`].

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::EpaperDitherer;
pub use color::Srgb;
pub use dither::{Dither, ErrorBuffer, FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use output::DitheredImage;
pub use palette::{Palette, PaletteError, SEVEN_COLOR};
pub use preprocess::{
    center_crop, cover_dimensions, crop_window, resize_and_crop, resize_to_cover, CropWindow,
    ParseFilterError, ResizeError, ResizeFilter,
};

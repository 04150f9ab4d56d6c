//! Palette types
//!
//! This module provides the fixed 7-color e-paper palette, the [`Palette`]
//! container with nearest-color search, and its validation error type.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, SEVEN_COLOR};

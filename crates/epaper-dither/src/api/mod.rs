//! Public API for the epaper-dither crate.
//!
//! This module provides the high-level [`EpaperDitherer`] builder.

mod builder;

pub use builder::EpaperDitherer;

//! Inkreel - video stills for 7-color e-paper
//!
//! Samples evenly spaced frames from a video (or takes a single still
//! image), fits them to the panel size and dithers them to the 7-color
//! palette. This library exposes modules for integration testing.

pub mod error;
pub mod media;
pub mod models;
pub mod services;

//! Error type for geometric preprocessing.

use std::fmt;

/// Error returned by [`resize_and_crop`](super::resize_and_crop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// The requested output is narrower or shorter than 2 pixels, which
    /// would crop to nothing.
    InvalidTarget {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The source buffer has no pixels.
    EmptySource {
        /// Source width.
        width: u32,
        /// Source height.
        height: u32,
    },
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::InvalidTarget { width, height } => {
                write!(f, "target size {}x{} must be at least 2x2", width, height)
            }
            ResizeError::EmptySource { width, height } => {
                write!(f, "source image {}x{} has no pixels", width, height)
            }
        }
    }
}

impl std::error::Error for ResizeError {}

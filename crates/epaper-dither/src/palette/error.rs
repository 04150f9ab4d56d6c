//! Error types for palette operations

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette configuration is invalid: no colors, duplicate
/// colors, or more entries than a `u8` index can address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// More colors than fit in a `u8` palette index
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {} colors, at most 256 are supported", count)
            }
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
        assert_eq!(
            PaletteError::DuplicateColor { index: 3 }.to_string(),
            "duplicate color found at index 3"
        );
        assert_eq!(
            PaletteError::TooManyColors { count: 300 }.to_string(),
            "palette has 300 colors, at most 256 are supported"
        );
    }
}

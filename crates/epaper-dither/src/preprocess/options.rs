//! Resampling filter selection.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;

/// Resampling filter used when scaling a frame to cover the target box.
///
/// The default is [`ResizeFilter::Triangle`] (bilinear), which matches the
/// interpolation commonly used by video tooling for downscaling.
///
/// # Example
///
/// ```
/// use epaper_dither::ResizeFilter;
///
/// let filter: ResizeFilter = "lanczos3".parse().unwrap();
/// assert_eq!(filter, ResizeFilter::Lanczos3);
/// assert_eq!(ResizeFilter::default(), ResizeFilter::Triangle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeFilter {
    /// Nearest neighbor.
    Nearest,
    /// Linear (bilinear) interpolation.
    #[default]
    Triangle,
    /// Cubic Catmull-Rom spline.
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl ResizeFilter {
    /// All filters, in the order they are listed in help output.
    pub const ALL: [ResizeFilter; 5] = [
        ResizeFilter::Nearest,
        ResizeFilter::Triangle,
        ResizeFilter::CatmullRom,
        ResizeFilter::Gaussian,
        ResizeFilter::Lanczos3,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }

    pub(crate) fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError {
    name: String,
}

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown resize filter '{}' (expected one of: nearest, triangle, catmull-rom, gaussian, lanczos3)",
            self.name
        )
    }
}

impl std::error::Error for ParseFilterError {}

impl FromStr for ResizeFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "triangle" | "bilinear" | "linear" => Ok(ResizeFilter::Triangle),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            _ => Err(ParseFilterError {
                name: s.to_string(),
            }),
        }
    }
}

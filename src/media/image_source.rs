use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult, RgbImage};
use std::path::Path;

use crate::error::MediaError;

/// Decode a still image from disk into 8-bit RGB.
///
/// The format is detected from the file contents and the EXIF orientation,
/// if any, is applied. Alpha is discarded.
pub fn read_image(path: &Path) -> Result<RgbImage, MediaError> {
    decode_oriented(path).map_err(|source| MediaError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_oriented(path: &Path) -> ImageResult<RgbImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image.into_rgb8())
}

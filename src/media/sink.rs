//! Image sinks: encode a dithered frame and write it to disk.

use epaper_dither::DitheredImage;
use image::ImageFormat;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::MediaError;
use crate::models::OutputFormat;

/// Destination encoder for dithered frames.
pub trait ImageSink {
    /// File extension this sink writes, without the dot
    fn extension(&self) -> &'static str;

    /// Encode `image` and write it to `path`, returning the written path
    fn write(&self, image: &DitheredImage, path: &Path) -> Result<PathBuf, MediaError>;
}

/// Pick the sink for an output format
pub fn sink_for(format: OutputFormat) -> Box<dyn ImageSink> {
    match format {
        OutputFormat::Bmp => Box::new(BitmapSink),
        OutputFormat::Png => Box::new(IndexedPngSink),
    }
}

/// Uncompressed 24-bit BMP.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapSink;

impl ImageSink for BitmapSink {
    fn extension(&self) -> &'static str {
        OutputFormat::Bmp.extension()
    }

    fn write(&self, image: &DitheredImage, path: &Path) -> Result<PathBuf, MediaError> {
        image
            .to_rgb_image()
            .save_with_format(path, ImageFormat::Bmp)
            .map_err(|source| MediaError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(path.to_path_buf())
    }
}

/// Indexed PNG carrying the panel palette in its PLTE chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedPngSink;

impl ImageSink for IndexedPngSink {
    fn extension(&self) -> &'static str {
        OutputFormat::Png.extension()
    }

    fn write(&self, image: &DitheredImage, path: &Path) -> Result<PathBuf, MediaError> {
        let bytes = encode_indexed_png(image)?;
        std::fs::write(path, &bytes).map_err(|source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path.to_path_buf())
    }
}

/// Encode a dithered image as an indexed PNG, then re-compress with oxipng.
pub fn encode_indexed_png(image: &DitheredImage) -> Result<Vec<u8>, MediaError> {
    let palette = image.palette();
    let (bit_depth, bits) = match palette.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.to_bytes()).collect();
    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), image.width(), bits)
    };

    // Fast settings: oxipng picks filters and compression afterwards
    let png_bytes = encode_png(image.width(), image.height(), bit_depth, &plte, &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

fn encode_png(
    width: u32,
    height: u32,
    bit_depth: png::BitDepth,
    plte: &[u8],
    packed: &[u8],
) -> Result<Vec<u8>, MediaError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| MediaError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| MediaError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack palette indices into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Each row starts on a byte boundary.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

//! In-memory video source.

use image::RgbImage;
use inkreel::error::VideoError;
use inkreel::media::VideoSource;
use inkreel::models::SourceMetadata;

use super::fixtures::gradient_frame;

/// A fake video whose frames are generated on demand.
///
/// Records every decoded index and can be told to fail on one of them.
pub struct FakeVideo {
    pub meta: SourceMetadata,
    pub width: u32,
    pub height: u32,
    pub decoded: Vec<u64>,
    pub fail_at: Option<u64>,
}

impl FakeVideo {
    pub fn new(total_frames: u64, fps: f64) -> Self {
        Self {
            meta: SourceMetadata::new(total_frames, fps),
            width: 192,
            height: 108,
            decoded: Vec::new(),
            fail_at: None,
        }
    }

    pub fn failing_at(mut self, index: u64) -> Self {
        self.fail_at = Some(index);
        self
    }
}

impl VideoSource for FakeVideo {
    fn metadata(&self) -> SourceMetadata {
        self.meta
    }

    fn decode_frame(&mut self, index: u64) -> Result<RgbImage, VideoError> {
        if self.fail_at == Some(index) {
            return Err(VideoError::Decode {
                index,
                message: "simulated decode failure".to_string(),
            });
        }
        if index >= self.meta.total_frames {
            return Err(VideoError::Decode {
                index,
                message: "no frame at this position".to_string(),
            });
        }
        self.decoded.push(index);
        Ok(gradient_frame(self.width, self.height))
    }
}

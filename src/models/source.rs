/// Length and rate of a video source, as reported by the decode layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMetadata {
    pub total_frames: u64,
    pub fps: f64,
}

impl SourceMetadata {
    pub fn new(total_frames: u64, fps: f64) -> Self {
        Self { total_frames, fps }
    }

    /// Total running time in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.total_frames as f64 / self.fps
    }

    /// Presentation time of a frame index, in seconds
    pub fn timestamp_of(&self, index: u64) -> f64 {
        index as f64 / self.fps
    }
}

//! Media adapters: frame decoding, still-image reading and output encoding.

pub mod ffprobe;
pub mod image_source;
pub mod sink;
pub mod video;

pub use ffprobe::{parse_frame_rate, ProbeInfo};
pub use image_source::read_image;
pub use sink::{sink_for, BitmapSink, ImageSink, IndexedPngSink};
pub use video::{FfmpegVideo, VideoSource};

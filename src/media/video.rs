//! Video frame access.
//!
//! [`VideoSource`] is the seam between the pipeline and whatever decodes
//! frames. [`FfmpegVideo`] is the production implementation: it probes the
//! file once with ffprobe and decodes each requested frame with a separate
//! ffmpeg invocation that writes raw RGB24 to stdout.

use image::RgbImage;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::ffprobe::{probe, ProbeInfo};
use crate::error::VideoError;
use crate::models::SourceMetadata;

/// Seconds decoded past the fast (keyframe) seek before the exact seek
const SEEK_MARGIN: f64 = 2.0;

/// A source of decoded video frames.
pub trait VideoSource {
    /// Frame count and frame rate of the source
    fn metadata(&self) -> SourceMetadata;

    /// Decode the frame at a 0-based index
    fn decode_frame(&mut self, index: u64) -> Result<RgbImage, VideoError>;
}

/// Frame decoding through the `ffmpeg` / `ffprobe` command-line tools.
#[derive(Debug, Clone)]
pub struct FfmpegVideo {
    path: PathBuf,
    info: ProbeInfo,
}

impl FfmpegVideo {
    /// Probe `path` and prepare it for frame extraction
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, VideoError> {
        let path = path.into();
        let info = probe(&path)?;
        tracing::debug!(
            path = %path.display(),
            width = info.width,
            height = info.height,
            frames = info.metadata.total_frames,
            fps = info.metadata.fps,
            "Probed video"
        );
        Ok(Self { path, info })
    }

}

impl VideoSource for FfmpegVideo {
    fn metadata(&self) -> SourceMetadata {
        self.info.metadata
    }

    fn decode_frame(&mut self, index: u64) -> Result<RgbImage, VideoError> {
        let timestamp = seek_target(&self.info.metadata, index);
        tracing::debug!(index, timestamp, "Decoding frame");

        let output = Command::new("ffmpeg")
            .args(decode_args(&self.path, timestamp))
            .output()
            .map_err(|source| VideoError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VideoError::Decode {
                index,
                message: stderr.trim().to_string(),
            });
        }

        frame_from_raw(index, self.info.width, self.info.height, output.stdout)
    }
}

/// Seek position for a frame index: half a frame before its presentation
/// time, so the exact seek lands on that frame even when the printed
/// timestamp is rounded past it.
fn seek_target(metadata: &SourceMetadata, index: u64) -> f64 {
    let half_frame = 0.5 / metadata.fps;
    (metadata.timestamp_of(index) - half_frame).max(0.0)
}

/// Build the ffmpeg arguments that decode one frame at `timestamp` seconds.
///
/// Uses a two-stage seek: `-ss` before `-i` jumps to a keyframe shortly
/// before the target, `-ss` after `-i` decodes forward to the exact time.
/// Only the first video stream is decoded, the one ffprobe described.
pub fn decode_args(path: &Path, timestamp: f64) -> Vec<OsString> {
    let t0 = (timestamp - SEEK_MARGIN).max(0.0);
    let delta = timestamp - t0;

    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-noautorotate"]
        .into_iter()
        .map(OsString::from)
        .collect();

    if t0 > 0.0 {
        args.push("-ss".into());
        args.push(format!("{t0:.6}").into());
    }

    args.push("-i".into());
    args.push(path.as_os_str().to_os_string());

    if delta > 0.0 {
        args.push("-ss".into());
        args.push(format!("{delta:.6}").into());
    }

    args.extend(
        [
            "-map", "0:v:0", "-frames:v", "1", "-an", "-sn", "-dn", "-f", "rawvideo", "-pix_fmt", "rgb24", "-",
        ]
        .into_iter()
        .map(OsString::from),
    );
    args
}

/// Wrap raw RGB24 bytes from ffmpeg in an image buffer.
///
/// The byte count must match the probed frame size exactly.
fn frame_from_raw(
    index: u64,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
) -> Result<RgbImage, VideoError> {
    let expected = width as usize * height as usize * 3;
    if bytes.is_empty() {
        return Err(VideoError::Decode {
            index,
            message: "no frame at this position".to_string(),
        });
    }
    let actual = bytes.len();
    if actual != expected {
        return Err(VideoError::FrameSize {
            index,
            expected,
            actual,
        });
    }

    RgbImage::from_raw(width, height, bytes).ok_or(VideoError::FrameSize {
        index,
        expected,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_decode_args_at_start() {
        let args = args_as_strings(&decode_args(Path::new("in.mp4"), 0.0));
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-loglevel",
                "error",
                "-noautorotate",
                "-i",
                "in.mp4",
                "-map",
                "0:v:0",
                "-frames:v",
                "1",
                "-an",
                "-sn",
                "-dn",
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgb24",
                "-",
            ]
        );
    }

    #[test]
    fn test_decode_args_two_stage_seek() {
        let args = args_as_strings(&decode_args(Path::new("in.mp4"), 12.5));
        let input = args.iter().position(|a| a == "-i").unwrap();

        assert_eq!(args[input - 2], "-ss");
        assert_eq!(args[input - 1], "10.500000");
        assert_eq!(args[input + 2], "-ss");
        assert_eq!(args[input + 3], "2.000000");
    }

    #[test]
    fn test_decode_args_short_seek() {
        // Under the margin: only the exact seek after -i
        let args = args_as_strings(&decode_args(Path::new("in.mp4"), 1.0));
        let input = args.iter().position(|a| a == "-i").unwrap();

        assert_eq!(args.iter().filter(|a| *a == "-ss").count(), 1);
        assert_eq!(args[input + 2], "-ss");
        assert_eq!(args[input + 3], "1.000000");
    }

    #[test]
    fn test_frame_from_raw() {
        let bytes = vec![10, 20, 30, 40, 50, 60];
        let frame = frame_from_raw(0, 2, 1, bytes).unwrap();
        assert_eq!(frame.get_pixel(1, 0).0, [40, 50, 60]);
    }

    #[test]
    fn test_frame_from_raw_rejects_oversized_frame() {
        // A 4x2 frame where a 2x2 frame was probed
        let err = frame_from_raw(3, 2, 2, (0..24).collect()).unwrap_err();
        assert!(matches!(
            err,
            VideoError::FrameSize {
                index: 3,
                expected: 12,
                actual: 24
            }
        ));
    }

    #[test]
    fn test_seek_target_lands_on_requested_frame() {
        // NTSC rate: frame times are not representable in 6 decimals
        let meta = SourceMetadata::new(100_000, 30000.0 / 1001.0);
        for index in [1, 149, 1234, 29_970, 99_999] {
            let printed: f64 = format!("{:.6}", seek_target(&meta, index))
                .parse()
                .unwrap();
            assert!(printed > meta.timestamp_of(index - 1), "frame {index}");
            assert!(printed <= meta.timestamp_of(index), "frame {index}");
        }
    }

    #[test]
    fn test_seek_target_first_frame() {
        let meta = SourceMetadata::new(300, 25.0);
        assert_eq!(seek_target(&meta, 0), 0.0);
        assert!((seek_target(&meta, 10) - 0.38).abs() < 1e-9);
    }

    #[test]
    fn test_frame_from_raw_empty() {
        let err = frame_from_raw(5, 2, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, VideoError::Decode { index: 5, .. }));
    }

    #[test]
    fn test_frame_from_raw_short() {
        let err = frame_from_raw(5, 2, 2, vec![0; 6]).unwrap_err();
        assert!(matches!(
            err,
            VideoError::FrameSize {
                index: 5,
                expected: 12,
                actual: 6
            }
        ));
    }
}

//! Stream probing via `ffprobe -print_format json`.

use serde::Deserialize;
use std::path::Path;
use std::process::Command;

use crate::error::VideoError;
use crate::models::SourceMetadata;

/// What the decoder needs to know about a video stream
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeInfo {
    pub width: u32,
    pub height: u32,
    pub metadata: SourceMetadata,
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    r_frame_rate: Option<String>,
    nb_frames: Option<String>,
    duration: Option<String>,
}

/// Run ffprobe on `path` and extract the first video stream's geometry,
/// frame count and frame rate.
pub fn probe(path: &Path) -> Result<ProbeInfo, VideoError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|source| VideoError::Spawn {
            tool: "ffprobe",
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VideoError::Probe {
            path: path.to_path_buf(),
            message: format!("exit status {}: {}", output.status, stderr.trim()),
        });
    }

    parse_probe(&String::from_utf8_lossy(&output.stdout), path)
}

/// Parse ffprobe JSON output.
///
/// The frame count comes from the stream's `nb_frames` when the container
/// records it, otherwise from duration times frame rate.
pub fn parse_probe(json: &str, path: &Path) -> Result<ProbeInfo, VideoError> {
    let probe: FfprobeOutput = serde_json::from_str(json).map_err(|e| VideoError::Probe {
        path: path.to_path_buf(),
        message: format!("unreadable ffprobe output: {e}"),
    })?;

    let stream = probe
        .streams
        .as_ref()
        .and_then(|streams| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
        })
        .ok_or_else(|| VideoError::NoVideoStream(path.to_path_buf()))?;

    let (width, height) = match (stream.width, stream.height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(VideoError::Probe {
                path: path.to_path_buf(),
                message: "video stream has no frame size".to_string(),
            })
        }
    };

    // Frame rate string is "30/1", "30000/1001" or "0/0" when unknown
    let fps = stream
        .avg_frame_rate
        .as_deref()
        .and_then(parse_frame_rate)
        .or_else(|| stream.r_frame_rate.as_deref().and_then(parse_frame_rate))
        .ok_or_else(|| VideoError::Probe {
            path: path.to_path_buf(),
            message: "video stream has no frame rate".to_string(),
        })?;

    let total_frames = match stream.nb_frames.as_deref().and_then(|n| n.parse::<u64>().ok()) {
        Some(n) if n > 0 => n,
        _ => {
            let duration = stream
                .duration
                .as_ref()
                .or(probe.format.as_ref().and_then(|f| f.duration.as_ref()))
                .and_then(|d| d.parse::<f64>().ok())
                .ok_or_else(|| VideoError::Probe {
                    path: path.to_path_buf(),
                    message: "neither frame count nor duration is known".to_string(),
                })?;
            (duration * fps).round() as u64
        }
    };

    Ok(ProbeInfo {
        width,
        height,
        metadata: SourceMetadata::new(total_frames, fps),
    })
}

/// Parse a frame rate string (e.g. "30/1" or "30000/1001").
///
/// Zero, negative and non-finite rates are rejected.
pub fn parse_frame_rate(rate: &str) -> Option<f64> {
    let value = if let Some((num_str, den_str)) = rate.split_once('/') {
        let num: f64 = num_str.trim().parse().ok()?;
        let den: f64 = den_str.trim().parse().ok()?;
        if den == 0.0 {
            return None;
        }
        num / den
    } else {
        rate.trim().parse().ok()?
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

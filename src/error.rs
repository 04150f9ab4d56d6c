use std::path::PathBuf;

use epaper_dither::ResizeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

impl SelectionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SelectionError::InvalidSelection {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("ffprobe failed for {path}: {message}")]
    Probe { path: PathBuf, message: String },

    #[error("No video stream in {0}")]
    NoVideoStream(PathBuf),

    #[error("Frame {index} could not be decoded: {message}")]
    Decode { index: u64, message: String },

    #[error("Frame {index} has the wrong size: expected {expected} bytes, got {actual}")]
    FrameSize {
        index: u64,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),

    #[error("Failed to decode frame {index}: {source}")]
    DecodeFailure {
        index: u64,
        #[source]
        source: VideoError,
    },

    #[error("Resize error: {0}")]
    Resize(#[from] ResizeError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Media(#[from] MediaError),
}

//! Frame selection: which source frames to extract for a run.
//!
//! Offsets and limits are given in seconds and minutes and converted to
//! frame counts with the source's frame rate. The frames left over form the
//! eligible window. A single frame is taken from the middle of the window;
//! several frames are spaced evenly from the start of the window, with the
//! last one pinned to the final eligible frame.

use crate::error::SelectionError;
use crate::models::SourceMetadata;

/// User-facing selection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Number of frames to extract (at least 1)
    pub frames: u64,
    pub seconds_offset: u64,
    pub minutes_offset: u64,
    pub seconds_limit: u64,
    pub minutes_limit: u64,
}

impl Default for SelectionRequest {
    fn default() -> Self {
        Self {
            frames: 1,
            seconds_offset: 0,
            minutes_offset: 0,
            seconds_limit: 0,
            minutes_limit: 0,
        }
    }
}

impl SelectionRequest {
    /// Request `frames` frames from the whole source
    pub fn frames(frames: u64) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    fn offset_seconds(&self) -> f64 {
        (self.seconds_offset as f64) + (self.minutes_offset as f64) * 60.0
    }

    fn limit_seconds(&self) -> f64 {
        (self.seconds_limit as f64) + (self.minutes_limit as f64) * 60.0
    }
}

/// The frames chosen for a run, plus the derived window figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPlan {
    /// 0-based frame indices, non-decreasing
    pub indices: Vec<u64>,
    /// Frames skipped at the start
    pub offset_frames: u64,
    /// Frames skipped at the end
    pub limit_frames: u64,
    /// Frames between offset and limit
    pub eligible_frames: u64,
    /// Spacing between evenly-spaced picks
    pub batch: u64,
}

impl SelectionPlan {
    /// Whether offset or limit narrowed the window
    pub fn is_narrowed(&self) -> bool {
        self.offset_frames > 0 || self.limit_frames > 0
    }
}

/// Convert a duration in seconds to a whole number of frames.
///
/// Halfway cases round away from zero.
fn seconds_to_frames(seconds: f64, fps: f64) -> u64 {
    (seconds * fps).round() as u64
}

/// Compute the frame indices to extract from a source.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidSelection`] when fewer than one frame is
/// requested, the frame rate is not a positive finite number, the offset and
/// limit leave no eligible frames, or the plan would contain an index
/// outside `[0, total_frames)`.
pub fn plan(
    metadata: &SourceMetadata,
    request: &SelectionRequest,
) -> Result<SelectionPlan, SelectionError> {
    let SourceMetadata { total_frames, fps } = *metadata;

    if request.frames < 1 {
        return Err(SelectionError::invalid("at least one frame must be requested"));
    }
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SelectionError::invalid(format!(
            "frame rate must be positive, got {fps}"
        )));
    }

    let offset_frames = seconds_to_frames(request.offset_seconds(), fps);
    let limit_frames = seconds_to_frames(request.limit_seconds(), fps);

    let eligible_frames = total_frames
        .checked_sub(offset_frames)
        .and_then(|rest| rest.checked_sub(limit_frames))
        .filter(|&eligible| eligible > 0)
        .ok_or_else(|| {
            SelectionError::invalid(format!(
                "offset ({offset_frames} frames) and limit ({limit_frames} frames) leave nothing of {total_frames} frames"
            ))
        })?;

    let batch = (eligible_frames - 1).max(1) / (request.frames - 1).max(1);

    let indices: Vec<u64> = if request.frames == 1 {
        vec![eligible_frames / 2 + offset_frames]
    } else {
        (0..request.frames - 1)
            .map(|n| n * batch + offset_frames)
            .chain(std::iter::once(total_frames - 1 - limit_frames))
            .collect()
    };

    if let Some(&bad) = indices.iter().find(|&&i| i >= total_frames) {
        return Err(SelectionError::invalid(format!(
            "frame {bad} is outside the source ({total_frames} frames)"
        )));
    }
    if indices.windows(2).any(|w| w[0] > w[1]) {
        return Err(SelectionError::invalid("frame indices are not in order"));
    }

    Ok(SelectionPlan {
        indices,
        offset_frames,
        limit_frames,
        eligible_frames,
        batch,
    })
}

/// Split a duration in seconds into whole hours, whole minutes and the
/// remaining (fractional) seconds.
pub fn hours_minutes_seconds(seconds: f64) -> (u64, u64, f64) {
    let hours = (seconds / 3600.0).floor();
    let rest = seconds - hours * 3600.0;
    let minutes = (rest / 60.0).floor();
    (hours as u64, minutes as u64, rest - minutes * 60.0)
}

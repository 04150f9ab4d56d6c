//! The frame pipeline: sample, decode, resize-and-crop, dither, encode.

use epaper_dither::{EpaperDitherer, Palette, ResizeFilter};
use image::RgbImage;
use std::path::{Path, PathBuf};

use super::frame_sampler::{hours_minutes_seconds, plan, SelectionPlan, SelectionRequest};
use crate::error::PipelineError;
use crate::media::{read_image, sink_for, ImageSink, VideoSource};
use crate::models::{AppConfig, OutputFormat};

/// Settings shared by every frame of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub filter: ResizeFilter,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        AppConfig::default().into()
    }
}

impl From<AppConfig> for PipelineOptions {
    fn from(config: AppConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            output_dir: config.output_dir,
            format: config.format,
            filter: config.filter,
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    /// Files written, in processing order
    pub written: Vec<PathBuf>,
    /// The frame selection, for movie runs
    pub plan: Option<SelectionPlan>,
}

/// Converts video frames or still images into dithered panel images.
pub struct FramePipeline {
    ditherer: EpaperDitherer,
    sink: Box<dyn ImageSink>,
    output_dir: PathBuf,
}

impl FramePipeline {
    pub fn new(options: PipelineOptions) -> Self {
        let sink = sink_for(options.format);
        Self::with_sink(options, sink)
    }

    /// Use a custom sink instead of the one for `options.format`
    pub fn with_sink(options: PipelineOptions, sink: Box<dyn ImageSink>) -> Self {
        let ditherer = EpaperDitherer::new(Palette::seven_color())
            .resize(options.width, options.height)
            .filter(options.filter);
        Self {
            ditherer,
            sink,
            output_dir: options.output_dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Extract, convert and write the frames selected by `request`.
    ///
    /// The first failing frame aborts the run; files already written stay
    /// on disk.
    pub fn run_movie(
        &self,
        source: &mut dyn VideoSource,
        request: &SelectionRequest,
    ) -> Result<RunReport, PipelineError> {
        self.ensure_output_dir()?;

        let meta = source.metadata();
        tracing::info!(
            total_frames = meta.total_frames,
            fps = meta.fps,
            "Total length: {:.0} min; FPS: {:.4}; Total frames: {}",
            meta.duration_seconds() / 60.0,
            meta.fps,
            meta.total_frames
        );

        let plan = plan(&meta, request)?;
        log_selection(&plan, request.frames, meta.fps);

        let mut written = Vec::with_capacity(plan.indices.len());
        for &index in &plan.indices {
            let frame = source
                .decode_frame(index)
                .map_err(|source| PipelineError::DecodeFailure { index, source })?;

            let stem = format!("frame_{:06}_d", index + 1);
            let path = self.process_frame(&frame, &stem)?;
            tracing::info!(index, path = %path.display(), "Wrote frame");
            written.push(path);
        }

        Ok(RunReport {
            written,
            plan: Some(plan),
        })
    }

    /// Convert a single still image.
    pub fn run_image(&self, path: &Path) -> Result<RunReport, PipelineError> {
        self.ensure_output_dir()?;

        let image = read_image(path)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Read image"
        );

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let written = self.process_frame(&image, &format!("{stem}_d"))?;
        tracing::info!(path = %written.display(), "Wrote image");

        Ok(RunReport {
            written: vec![written],
            plan: None,
        })
    }

    /// Resize, dither and write one frame as `<output_dir>/<stem>.<ext>`.
    pub fn process_frame(&self, frame: &RgbImage, stem: &str) -> Result<PathBuf, PipelineError> {
        let dithered = self.ditherer.process(frame)?;
        let path = self
            .output_dir
            .join(format!("{stem}.{}", self.sink.extension()));
        Ok(self.sink.write(&dithered, &path)?)
    }

    fn ensure_output_dir(&self) -> Result<(), PipelineError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::Io {
            path: self.output_dir.clone(),
            source,
        })
    }
}

fn log_selection(plan: &SelectionPlan, frames: u64, fps: f64) {
    if plan.is_narrowed() {
        tracing::info!("Starting at frame {}", plan.offset_frames);
        let (h, m, s) = hours_minutes_seconds(plan.eligible_frames as f64 / fps);
        tracing::info!("Selection length: {}:{:02}:{:.1}", h, m, s);
    }
    tracing::info!(
        frames,
        eligible = plan.eligible_frames,
        batch = plan.batch,
        "{} of {} frames (every {:.1} s.)",
        frames,
        plan.eligible_frames,
        plan.batch as f64 / fps
    );
}

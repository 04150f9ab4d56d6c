use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use epaper_dither::ResizeFilter;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkreel::media::FfmpegVideo;
use inkreel::models::{AppConfig, ConfigOverrides, OutputFormat};
use inkreel::services::{FramePipeline, PipelineOptions, RunReport, SelectionRequest};

#[derive(Parser)]
#[command(name = "inkreel")]
#[command(version)]
#[command(about = "Sample video frames and dither them for 7-color e-paper panels")]
struct Cli {
    /// YAML configuration file (default: $INKREEL_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format [default: bmp]
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3 [default: triangle]
    #[arg(long, global = true)]
    filter: Option<ResizeFilter>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract evenly spaced frames from a video and dither them
    #[command(disable_help_flag = true)]
    Movie(MovieArgs),
    /// Dither a single still image
    #[command(disable_help_flag = true)]
    Image(ImageArgs),
}

/// Output geometry shared by both commands. `-h` is height, so help is
/// only available as `--help`.
#[derive(Args)]
struct PanelArgs {
    /// Output width in pixels [default: 800]
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Output height in pixels [default: 480]
    #[arg(short = 'h', long)]
    height: Option<u32>,

    /// Output directory, created if missing [default: .]
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Args)]
struct MovieArgs {
    /// Video file
    path: PathBuf,

    /// Number of frames to extract
    #[arg(default_value_t = 1)]
    frames: u64,

    #[command(flatten)]
    panel: PanelArgs,

    /// Skip this many seconds at the start
    #[arg(short = 's', long, default_value_t = 0)]
    seconds_offset: u64,

    /// Skip this many minutes at the start
    #[arg(short = 'm', long, default_value_t = 0)]
    minutes_offset: u64,

    /// Skip this many seconds at the end
    #[arg(short = 'z', long, default_value_t = 0)]
    seconds_limit: u64,

    /// Skip this many minutes at the end
    #[arg(short = 'n', long, default_value_t = 0)]
    minutes_limit: u64,
}

#[derive(Args)]
struct ImageArgs {
    /// Image file
    path: PathBuf,

    #[command(flatten)]
    panel: PanelArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkreel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Commands::Movie(args) => {
            let options = resolve_options(config, &args.panel, cli.format, cli.filter);
            run_movie_command(args, options)
        }
        Commands::Image(args) => {
            let options = resolve_options(config, &args.panel, cli.format, cli.filter);
            run_image_command(args, options)
        }
    }
}

/// Flags override the config file, which overrides the defaults
fn resolve_options(
    config: AppConfig,
    panel: &PanelArgs,
    format: Option<OutputFormat>,
    filter: Option<ResizeFilter>,
) -> PipelineOptions {
    config
        .with_overrides(ConfigOverrides {
            width: panel.width,
            height: panel.height,
            output_dir: panel.output_dir.clone(),
            format,
            filter,
        })
        .into()
}

fn run_movie_command(args: MovieArgs, options: PipelineOptions) -> anyhow::Result<()> {
    let request = SelectionRequest {
        frames: args.frames,
        seconds_offset: args.seconds_offset,
        minutes_offset: args.minutes_offset,
        seconds_limit: args.seconds_limit,
        minutes_limit: args.minutes_limit,
    };

    let mut video = FfmpegVideo::open(&args.path)
        .with_context(|| format!("Failed to open video {}", args.path.display()))?;

    let pipeline = FramePipeline::new(options);
    let report = pipeline
        .run_movie(&mut video, &request)
        .with_context(|| format!("Failed to process {}", args.path.display()))?;

    log_report(&report, &pipeline);
    Ok(())
}

fn run_image_command(args: ImageArgs, options: PipelineOptions) -> anyhow::Result<()> {
    let pipeline = FramePipeline::new(options);
    let report = pipeline
        .run_image(&args.path)
        .with_context(|| format!("Failed to process {}", args.path.display()))?;

    log_report(&report, &pipeline);
    Ok(())
}

fn log_report(report: &RunReport, pipeline: &FramePipeline) {
    tracing::info!(
        files = report.written.len(),
        output_dir = %pipeline.output_dir().display(),
        "Done"
    );
}

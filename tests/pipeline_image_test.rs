//! End-to-end tests for the single-image path of the frame pipeline.

mod common;

use common::fixtures;
use inkreel::error::{MediaError, PipelineError};
use inkreel::models::OutputFormat;
use inkreel::services::{FramePipeline, PipelineOptions};
use pretty_assertions::assert_eq;

#[test]
fn test_image_output_named_after_stem() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(
        input.path(),
        "holiday.png",
        &fixtures::gradient_frame(320, 200),
    );

    let report = FramePipeline::new(PipelineOptions {
        width: 120,
        height: 90,
        output_dir: output.path().to_path_buf(),
        ..PipelineOptions::default()
    })
    .run_image(&path)
    .unwrap();

    assert_eq!(report.written, vec![output.path().join("holiday_d.bmp")]);
    assert!(report.plan.is_none());
    common::assert_dithered_file(&report.written[0], 120, 90);
}

#[test]
fn test_panel_colored_stripes_survive_center_crop() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    // 7 stripes of 10 px; the target is the same height, so no scaling
    let path = fixtures::write_image(input.path(), "bars.png", &fixtures::stripes_frame(70, 20));

    let report = FramePipeline::new(PipelineOptions {
        width: 30,
        height: 20,
        output_dir: output.path().to_path_buf(),
        ..PipelineOptions::default()
    })
    .run_image(&path)
    .unwrap();

    // Columns 20..50 of the source: stripes 2, 3 and 4
    let image = common::assert_dithered_file(&report.written[0], 30, 20);
    assert_eq!(image.get_pixel(0, 0).0, fixtures::PANEL_COLORS[2]);
    assert_eq!(image.get_pixel(15, 10).0, fixtures::PANEL_COLORS[3]);
    assert_eq!(image.get_pixel(29, 19).0, fixtures::PANEL_COLORS[4]);
}

#[test]
fn test_odd_target_loses_one_pixel() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "odd.png", &fixtures::gradient_frame(64, 64));

    let report = FramePipeline::new(PipelineOptions {
        width: 33,
        height: 21,
        output_dir: output.path().to_path_buf(),
        ..PipelineOptions::default()
    })
    .run_image(&path)
    .unwrap();

    common::assert_dithered_file(&report.written[0], 32, 20);
}

#[test]
fn test_missing_input_is_a_media_error() {
    let output = tempfile::tempdir().unwrap();
    let err = FramePipeline::new(PipelineOptions {
        output_dir: output.path().to_path_buf(),
        ..PipelineOptions::default()
    })
    .run_image(&output.path().join("missing.jpg"))
    .unwrap_err();

    assert!(matches!(err, PipelineError::Media(MediaError::Read { .. })));
}

#[test]
fn test_zero_target_is_a_resize_error() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "a.png", &fixtures::gradient_frame(8, 8));

    let err = FramePipeline::new(PipelineOptions {
        width: 0,
        output_dir: output.path().to_path_buf(),
        ..PipelineOptions::default()
    })
    .run_image(&path)
    .unwrap_err();

    assert!(matches!(err, PipelineError::Resize(_)));
}

#[test]
fn test_single_pixel_target_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "tiny.png", &fixtures::gradient_frame(8, 8));

    for format in [OutputFormat::Bmp, OutputFormat::Png] {
        let err = FramePipeline::new(PipelineOptions {
            width: 1,
            height: 1,
            format,
            output_dir: output.path().to_path_buf(),
            ..PipelineOptions::default()
        })
        .run_image(&path)
        .unwrap_err();

        assert!(matches!(err, PipelineError::Resize(_)), "{format:?}");
    }
    assert!(common::list_files(output.path()).is_empty());
}

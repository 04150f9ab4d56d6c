//! Tests that drive the `inkreel` binary.

mod common;

use common::fixtures;
use std::process::Command;

fn inkreel() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_inkreel"));
    cmd.env_remove("INKREEL_CONFIG");
    cmd
}

#[test]
fn test_image_command_with_short_flags() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "poster.png", &fixtures::gradient_frame(200, 100));

    let status = inkreel()
        .arg("image")
        .arg(&path)
        .args(["-w", "60", "-h", "40", "-o"])
        .arg(output.path())
        .status()
        .unwrap();

    assert!(status.success());
    common::assert_dithered_file(&output.path().join("poster_d.bmp"), 60, 40);
}

#[test]
fn test_image_command_png_format() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "poster.png", &fixtures::gradient_frame(200, 100));

    let status = inkreel()
        .args(["--format", "png", "--filter", "lanczos3", "image"])
        .arg(&path)
        .args(["--width", "50", "--height", "30", "--output-dir"])
        .arg(output.path())
        .status()
        .unwrap();

    assert!(status.success());
    common::assert_dithered_file(&output.path().join("poster_d.png"), 50, 30);
}

#[test]
fn test_config_file_supplies_defaults() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let path = fixtures::write_image(input.path(), "still.png", &fixtures::gradient_frame(90, 90));
    let config = input.path().join("inkreel.yaml");
    std::fs::write(
        &config,
        format!(
            "width: 24\nheight: 16\noutput_dir: {}\n",
            output.path().display()
        ),
    )
    .unwrap();

    // Height from the command line wins over the file
    let status = inkreel()
        .env("INKREEL_CONFIG", &config)
        .arg("image")
        .arg(&path)
        .args(["-h", "12"])
        .status()
        .unwrap();

    assert!(status.success());
    common::assert_dithered_file(&output.path().join("still_d.bmp"), 24, 12);
}

#[test]
fn test_long_help_is_available() {
    let output = inkreel().args(["image", "--help"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("--height"));
}

#[test]
fn test_missing_image_fails() {
    let output = tempfile::tempdir().unwrap();
    let status = inkreel()
        .arg("image")
        .arg(output.path().join("nope.png"))
        .arg("-o")
        .arg(output.path())
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn test_movie_with_unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("clip.mp4");
    std::fs::write(&bogus, b"not a video").unwrap();

    let status = inkreel()
        .arg("movie")
        .arg(&bogus)
        .arg("3")
        .arg("-o")
        .arg(dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!dir.path().join("frame_000001_d.bmp").exists());
}

use std::{
    path::Path,
    process::{Command, Output},
};

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

fn myproc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_myproc"))
        .args(args)
        .output()
        .expect("failed to spawn myproc")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not utf-8")
}

fn step_image(path: &Path) -> Result<(), image::ImageError> {
    RgbImage::from_fn(32, 24, |x, _| {
        if x < 16 {
            Rgb([10, 20, 30])
        } else {
            Rgb([230, 240, 250])
        }
    })
    .save(path)
}

#[test]
fn help_exits_zero() {
    let out = myproc(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage:"));

    let out = myproc(&["-h"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn missing_op_prints_usage() {
    let out = myproc(&["-in", "a.png", "-out", "b.png"]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("Error: Missing required argument: -op"));
}

#[test]
fn unsupported_op_exits_one() {
    let out = myproc(&["-op", "sharpen", "-in", "a.png", "-out", "b.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unsupported -op: sharpen"));
}

#[test]
fn invalid_threshold_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let output = tmp_dir.path().join("out.png");
    step_image(&input)?;

    let out = myproc(&[
        "-op",
        "bin",
        "-th",
        "999",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn huge_sigma_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let output = tmp_dir.path().join("out.png");
    step_image(&input)?;

    let out = myproc(&[
        "-op",
        "blur",
        "-sigma",
        "1e300",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: Invalid parameter -sigma"));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn help_in_value_position_is_a_path() {
    let out = myproc(&["-op", "edge", "-in", "-help", "-out", "o.png"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn missing_input_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("nope.png");
    let output = tmp_dir.path().join("out.png");

    let out = myproc(&[
        "-op",
        "edge",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: Failed to read image"));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn unwritable_output_exits_three() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    step_image(&input)?;

    let output = tmp_dir.path().join("missing_dir").join("out.png");
    let out = myproc(&[
        "-op",
        "blur",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(3));

    let output = tmp_dir.path().join("out.unknown");
    let out = myproc(&[
        "-op",
        "blur",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(3));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn blur_keeps_size_and_three_channels() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let output = tmp_dir.path().join("out.png");
    RgbaImage::from_pixel(20, 10, Rgba([50, 100, 150, 128])).save(&input)?;

    let out = myproc(&[
        "-op",
        "blur",
        "-sigma",
        "2",
        "-in",
        path_str(&input),
        "-out",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(0));

    let result = image::open(&output)?;
    assert_eq!(result.color().channel_count(), 3);
    assert_eq!((result.width(), result.height()), (20, 10));

    Ok(())
}

#[test]
fn edge_outputs_binary_gray() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let output = tmp_dir.path().join("edges.png");
    step_image(&input)?;

    let out = myproc(&["-op", "edge", "-in", path_str(&input), "-out", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));

    let result = image::open(&output)?;
    assert_eq!(result.color().channel_count(), 1);

    let gray = result.into_luma8();
    assert_eq!(gray.dimensions(), (32, 24));
    assert!(gray.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    assert!(gray.pixels().any(|p| p.0[0] == 255));

    Ok(())
}

#[test]
fn otsu_and_inverted_are_complements() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let plain = tmp_dir.path().join("plain.png");
    let inverted = tmp_dir.path().join("inverted.bmp");
    GrayImage::from_fn(16, 16, |x, y| Luma([((x + y) * 8) as u8])).save(&input)?;

    let out = myproc(&[
        "-op",
        "bin",
        "-otsu",
        "-in",
        path_str(&input),
        "-out",
        path_str(&plain),
    ]);
    assert_eq!(out.status.code(), Some(0));

    let out = myproc(&[
        "-op",
        "bin",
        "-otsu",
        "-inv",
        "-in",
        path_str(&input),
        "-out",
        path_str(&inverted),
    ]);
    assert_eq!(out.status.code(), Some(0));

    let plain = image::open(&plain)?.into_luma8();
    let inverted = image::open(&inverted)?.into_luma8();

    assert!(plain.pixels().any(|p| p.0[0] == 0));
    assert!(plain.pixels().any(|p| p.0[0] == 255));
    for (a, b) in plain.pixels().zip(inverted.pixels()) {
        assert_eq!(a.0[0], 255 - b.0[0]);
    }

    Ok(())
}

#[test]
fn line_profile_to_csv() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("in.png");
    let output = tmp_dir.path().join("row.csv");
    GrayImage::from_fn(4, 3, |x, y| Luma([(10 * y + x) as u8])).save(&input)?;

    let out = Command::new(env!("CARGO_BIN_EXE_line_profile"))
        .args(["-i", path_str(&input), "-o", path_str(&output), "--row", "1"])
        .output()?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "index,gray\n0,10\n1,11\n2,12\n3,13\n"
    );

    let out = Command::new(env!("CARGO_BIN_EXE_line_profile"))
        .args(["-i", path_str(&input), "--column", "9"])
        .output()?;
    assert_eq!(out.status.code(), Some(1));

    let out = Command::new(env!("CARGO_BIN_EXE_line_profile"))
        .args(["-i", path_str(&input), "--column", "0"])
        .output()?;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "index,gray\n0,0\n1,10\n2,20\n"
    );

    Ok(())
}

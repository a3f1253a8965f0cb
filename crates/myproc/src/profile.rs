use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use myproc_image::ImageError;
use myproc_imgproc::{
    color,
    profile::{self, LineAxis, LineProfile},
};
use myproc_io::{functional, IoError};

use crate::{args::ArgsError, error::MyProcError};

/// What to sample from which image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    /// The image to read.
    pub input: PathBuf,
    /// Whether `index` selects a row or a column.
    pub axis: LineAxis,
    /// The row or column to sample.
    pub index: usize,
    /// Sample the three color channels instead of the luminance.
    pub rgb: bool,
}

/// Read an image and sample one of its rows or columns.
///
/// # Errors
///
/// * [`MyProcError::Read`] when the input cannot be read.
/// * [`MyProcError::Usage`] when the index lies outside the image.
/// * [`MyProcError::Processing`] when the channel count cannot be normalized.
pub fn extract_profile(request: &ProfileRequest) -> Result<LineProfile, MyProcError> {
    let src = functional::read_image_any(&request.input).map_err(MyProcError::Read)?;

    let result = if request.rgb {
        profile::line_profile_rgb(&color::to_three_channel(src)?, request.axis, request.index)
    } else {
        profile::line_profile_gray(&color::to_single_channel(src)?, request.axis, request.index)
    };

    result.map_err(|err| match err {
        ImageError::LineIndexOutOfBounds { .. } => ArgsError::InvalidParameter {
            name: match request.axis {
                LineAxis::Row => "--row",
                LineAxis::Column => "--column",
            },
            reason: err.to_string(),
        }
        .into(),
        err => err.into(),
    })
}

/// Write a profile as CSV to `path`, or to stdout when no path is given.
///
/// The CSV text is built in memory first, a failure leaves no partial file.
pub fn write_profile(profile: &LineProfile, path: Option<&Path>) -> Result<(), MyProcError> {
    let mut csv = Vec::with_capacity(16 * (profile.len() + 1));
    profile
        .write_csv(&mut csv)
        .map_err(|e| MyProcError::Write(IoError::from(e)))?;

    let written = match path {
        Some(path) => fs::write(path, &csv),
        None => io::stdout().lock().write_all(&csv),
    };

    written.map_err(|e| MyProcError::Write(IoError::from(e)))
}

use std::io::Write;

use image::{GrayImage, Pixel, RgbImage};
use myproc_image::ImageError;

/// The direction along which a profile is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAxis {
    /// Sample a full row, left to right.
    Row,
    /// Sample a full column, top to bottom.
    Column,
}

/// Intensity values sampled along one row or column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineProfile {
    /// Luminance samples.
    Gray(Vec<u8>),
    /// Per channel samples.
    Rgb {
        /// red channel
        r: Vec<u8>,
        /// green channel
        g: Vec<u8>,
        /// blue channel
        b: Vec<u8>,
    },
}

impl LineProfile {
    /// Number of samples in the profile.
    pub fn len(&self) -> usize {
        match self {
            LineProfile::Gray(values) => values.len(),
            LineProfile::Rgb { r, .. } => r.len(),
        }
    }

    /// Returns true when the profile holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the profile as CSV, one sample per line after a header.
    ///
    /// # Example
    ///
    /// ```
    /// use myproc_imgproc::profile::LineProfile;
    ///
    /// let mut csv = Vec::new();
    /// LineProfile::Gray(vec![3, 7]).write_csv(&mut csv).unwrap();
    ///
    /// assert_eq!(String::from_utf8(csv).unwrap(), "index,gray\n0,3\n1,7\n");
    /// ```
    pub fn write_csv<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        match self {
            LineProfile::Gray(values) => {
                writeln!(writer, "index,gray")?;
                for (i, v) in values.iter().enumerate() {
                    writeln!(writer, "{i},{v}")?;
                }
            }
            LineProfile::Rgb { r, g, b } => {
                writeln!(writer, "index,R,G,B")?;
                for (i, ((r, g), b)) in r.iter().zip(g).zip(b).enumerate() {
                    writeln!(writer, "{i},{r},{g},{b}")?;
                }
            }
        }
        writer.flush()
    }
}

fn check_index(width: u32, height: u32, axis: LineAxis, index: usize) -> Result<(), ImageError> {
    let len = match axis {
        LineAxis::Row => height,
        LineAxis::Column => width,
    } as usize;

    if index >= len {
        return Err(ImageError::LineIndexOutOfBounds { index, len });
    }

    Ok(())
}

fn sample_line<P: Pixel>(
    src: &image::ImageBuffer<P, Vec<P::Subpixel>>,
    axis: LineAxis,
    index: usize,
) -> Result<Vec<P>, ImageError> {
    check_index(src.width(), src.height(), axis, index)?;

    let index = index as u32;
    let line = match axis {
        LineAxis::Row => (0..src.width()).map(|x| *src.get_pixel(x, index)).collect(),
        LineAxis::Column => (0..src.height()).map(|y| *src.get_pixel(index, y)).collect(),
    };

    Ok(line)
}

/// Sample the luminance of a grayscale image along one row or column.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `axis` - Whether `index` selects a row or a column.
/// * `index` - The row or column to sample.
///
/// # Errors
///
/// Returns [`ImageError::LineIndexOutOfBounds`] when `index` is outside the image.
pub fn line_profile_gray(
    src: &GrayImage,
    axis: LineAxis,
    index: usize,
) -> Result<LineProfile, ImageError> {
    let line = sample_line(src, axis, index)?;
    Ok(LineProfile::Gray(line.iter().map(|p| p.0[0]).collect()))
}

/// Sample the three channels of an RGB image along one row or column.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `axis` - Whether `index` selects a row or a column.
/// * `index` - The row or column to sample.
///
/// # Errors
///
/// Returns [`ImageError::LineIndexOutOfBounds`] when `index` is outside the image.
pub fn line_profile_rgb(
    src: &RgbImage,
    axis: LineAxis,
    index: usize,
) -> Result<LineProfile, ImageError> {
    let line = sample_line(src, axis, index)?;
    Ok(LineProfile::Rgb {
        r: line.iter().map(|p| p.0[0]).collect(),
        g: line.iter().map(|p| p.0[1]).collect(),
        b: line.iter().map(|p| p.0[2]).collect(),
    })
}

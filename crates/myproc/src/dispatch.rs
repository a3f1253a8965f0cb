use myproc_image::GenericImage;
use myproc_imgproc::{
    color, edges, filter,
    threshold::{self, ThresholdType},
};
use myproc_io::functional;

use crate::{
    args::{Config, Operation, Threshold},
    error::MyProcError,
};

/// Apply one operation to an image.
///
/// The image is first brought to the channel count the operation works on: three
/// channels for blur, a single luminance channel for edge and binarize.
///
/// # Arguments
///
/// * `operation` - The operation to apply.
/// * `src` - The input image, consumed.
///
/// # Returns
///
/// A 3 channel image for blur, a 1 channel image with values 0 or 255 otherwise.
///
/// # Errors
///
/// Returns [`MyProcError::Processing`] when the channel count cannot be normalized.
pub fn apply(operation: &Operation, src: GenericImage) -> Result<GenericImage, MyProcError> {
    let dst = match *operation {
        Operation::Blur { sigma } => {
            let rgb = color::to_three_channel(src)?;
            GenericImage::from(filter::gaussian_blur(&rgb, sigma)?)
        }
        Operation::Edge => {
            let gray = color::to_single_channel(src)?;
            GenericImage::from(edges::canny_edges(&gray))
        }
        Operation::Binarize {
            threshold: level,
            invert,
        } => {
            let gray = color::to_single_channel(src)?;
            let threshold_type = if invert {
                ThresholdType::BinaryInv
            } else {
                ThresholdType::Binary
            };
            let bin = match level {
                Threshold::Fixed(level) => threshold::threshold_binary(&gray, level, threshold_type),
                Threshold::Otsu => threshold::otsu_threshold(&gray, threshold_type).1,
            };
            GenericImage::from(bin)
        }
    };

    Ok(dst)
}

/// Run the whole pipeline: read, transform and write.
///
/// Nothing is written unless every previous stage succeeded.
///
/// # Errors
///
/// * [`MyProcError::Read`] when the input cannot be read.
/// * [`MyProcError::Processing`] when the transform rejects the image.
/// * [`MyProcError::NoOutputProduced`] when the transform yields an empty image.
/// * [`MyProcError::Write`] when the output cannot be written.
pub fn run(config: &Config) -> Result<(), MyProcError> {
    let src = functional::read_image_any(&config.input).map_err(MyProcError::Read)?;

    log::debug!(
        "running {} on {} with {} channels",
        config.operation.name(),
        src.size(),
        src.num_channels()
    );

    let dst = apply(&config.operation, src)?;

    if dst.size().is_empty() {
        return Err(MyProcError::NoOutputProduced);
    }

    functional::write_image_any(&config.output, &dst).map_err(MyProcError::Write)?;

    log::info!(
        "{}: {} -> {}",
        config.operation.name(),
        config.input.display(),
        config.output.display()
    );

    Ok(())
}

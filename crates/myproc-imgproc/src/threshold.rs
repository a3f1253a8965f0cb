use image::GrayImage;

/// The type of binary thresholding to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdType {
    /// Pixels above the threshold become 255, the rest 0.
    Binary,
    /// Pixels above the threshold become 0, the rest 255.
    BinaryInv,
}

impl From<ThresholdType> for imageproc::contrast::ThresholdType {
    fn from(threshold_type: ThresholdType) -> Self {
        match threshold_type {
            ThresholdType::Binary => imageproc::contrast::ThresholdType::Binary,
            ThresholdType::BinaryInv => imageproc::contrast::ThresholdType::BinaryInverted,
        }
    }
}

/// Apply a binary threshold to a grayscale image.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `threshold` - The threshold value.
/// * `threshold_type` - Whether pixels above the threshold map to 255 or to 0.
///
/// # Returns
///
/// The thresholded image, with every pixel either 0 or 255.
///
/// # Examples
///
/// ```
/// use image::GrayImage;
/// use myproc_imgproc::threshold::{threshold_binary, ThresholdType};
///
/// let image = GrayImage::from_raw(2, 3, vec![100u8, 200, 50, 150, 200, 250]).unwrap();
/// let thresholded = threshold_binary(&image, 100, ThresholdType::Binary);
///
/// assert_eq!(thresholded.as_raw(), &vec![0u8, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary(src: &GrayImage, threshold: u8, threshold_type: ThresholdType) -> GrayImage {
    imageproc::contrast::threshold(src, threshold, threshold_type.into())
}

/// Compute the threshold that maximizes the inter-class variance of the image histogram.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
///
/// # Returns
///
/// The Otsu threshold level.
pub fn otsu_threshold_level(src: &GrayImage) -> u8 {
    imageproc::contrast::otsu_level(src)
}

/// Apply Otsu's thresholding to an image.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `threshold_type` - Whether pixels above the threshold map to 255 or to 0.
///
/// # Returns
///
/// The computed threshold level together with the thresholded image.
pub fn otsu_threshold(src: &GrayImage, threshold_type: ThresholdType) -> (u8, GrayImage) {
    let level = otsu_threshold_level(src);
    log::debug!("otsu threshold level {level}");
    (level, threshold_binary(src, level, threshold_type))
}

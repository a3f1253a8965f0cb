use image::RgbImage;
use imageproc::filter::separable_filter_equal;
use myproc_image::ImageError;

use super::kernels;

/// Blur an image using a gaussian blur filter
///
/// The kernel size is derived from `sigma` (see [`kernels::gaussian_kernel_size`]) and the
/// same kernel is applied along both axes. Pixels outside the image replicate the border.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `sigma` - The sigma of the gaussian kernel, shared by both axes.
///
/// # Returns
///
/// The blurred image with the same size as `src`.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use myproc_imgproc::filter::gaussian_blur;
///
/// let image = RgbImage::from_pixel(8, 6, Rgb([10, 20, 30]));
/// let blurred = gaussian_blur(&image, 1.5).unwrap();
///
/// assert_eq!(blurred.dimensions(), (8, 6));
/// ```
pub fn gaussian_blur(src: &RgbImage, sigma: f64) -> Result<RgbImage, ImageError> {
    let kernel_size = kernels::gaussian_kernel_size(sigma)?;
    let kernel = kernels::gaussian_kernel_1d(kernel_size, sigma);

    log::debug!("gaussian blur with sigma {sigma} and kernel size {kernel_size}");

    Ok(separable_filter_equal(src, &kernel))
}

use image::{DynamicImage, GrayImage, ImageBuffer, Pixel, RgbImage};
use myproc_image::{GenericImage, ImageError};

/// BT.601 luma weights in 14 bit fixed point: 0.299, 0.587 and 0.114 scaled by 2^14.
const RW: u32 = 4899;
const GW: u32 = 9617;
const BW: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Luma of one RGB triplet, `Y = 0.299 * R + 0.587 * G + 0.114 * B` rounded to nearest.
///
/// # Example
///
/// ```
/// use myproc_imgproc::color::luma_from_rgb;
///
/// assert_eq!(luma_from_rgb(255, 0, 0), 76);
/// assert_eq!(luma_from_rgb(0, 255, 0), 150);
/// assert_eq!(luma_from_rgb(0, 0, 255), 29);
/// assert_eq!(luma_from_rgb(255, 255, 255), 255);
/// ```
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    let y = u32::from(r) * RW + u32::from(g) * GW + u32::from(b) * BW;
    ((y + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

// the first three channels are read as R, G, B; any alpha is ignored
fn gray_from_color<P: Pixel<Subpixel = u8>>(src: &ImageBuffer<P, Vec<u8>>) -> GrayImage {
    let mut dst = GrayImage::new(src.width(), src.height());
    for (src_pixel, dst_pixel) in src.pixels().zip(dst.pixels_mut()) {
        let c = src_pixel.channels();
        dst_pixel.0[0] = luma_from_rgb(c[0], c[1], c[2]);
    }
    dst
}

/// Bring an image to three channels.
///
/// RGB images pass through untouched, RGBA images drop the alpha channel and
/// grayscale images replicate the intensity across the three channels.
///
/// # Arguments
///
/// * `src` - The input image with 1, 3 or 4 channels.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedChannelCount`] for any other channel count.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use myproc_image::GenericImage;
/// use myproc_imgproc::color::to_three_channel;
///
/// let gray = GenericImage::from(GrayImage::from_pixel(4, 5, Luma([42])));
/// let rgb = to_three_channel(gray).unwrap();
///
/// assert_eq!(rgb.dimensions(), (4, 5));
/// assert_eq!(rgb.get_pixel(0, 0).0, [42, 42, 42]);
/// ```
pub fn to_three_channel(src: GenericImage) -> Result<RgbImage, ImageError> {
    match src {
        GenericImage::Rgb8(img) => Ok(img),
        GenericImage::Rgba8(img) => Ok(DynamicImage::ImageRgba8(img).into_rgb8()),
        GenericImage::L8(img) => Ok(DynamicImage::ImageLuma8(img).into_rgb8()),
        other => Err(ImageError::UnsupportedChannelCount(other.num_channels())),
    }
}

/// Bring an image to a single luminance channel.
///
/// Grayscale images pass through untouched, RGB and RGBA images are reduced to
/// their BT.601 luminance with [`luma_from_rgb`] (the alpha channel is discarded).
///
/// # Arguments
///
/// * `src` - The input image with 1, 3 or 4 channels.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedChannelCount`] for any other channel count.
pub fn to_single_channel(src: GenericImage) -> Result<GrayImage, ImageError> {
    match src {
        GenericImage::L8(img) => Ok(img),
        GenericImage::Rgb8(img) => Ok(gray_from_color(&img)),
        GenericImage::Rgba8(img) => Ok(gray_from_color(&img)),
        other => Err(ImageError::UnsupportedChannelCount(other.num_channels())),
    }
}

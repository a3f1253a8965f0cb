use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use myproc_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Returns true when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        ImageSize {
            width: width as usize,
            height: height as usize,
        }
    }
}

/// An 8-bit image that keeps the channel layout it was created with.
///
/// Decoded files with a higher bit depth are reduced to 8 bits per channel,
/// but gray stays gray and alpha stays alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(GrayImage),
    /// 8-bit grayscale image with alpha channel
    La8(GrayAlphaImage),
    /// 8-bit RGB image
    Rgb8(RgbImage),
    /// 8-bit RGB image with alpha channel
    Rgba8(RgbaImage),
}

impl GenericImage {
    /// The size of the image in pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use myproc_image::{GenericImage, ImageSize};
    ///
    /// let image = GenericImage::from(image::RgbImage::new(4, 5));
    /// assert_eq!(image.size(), ImageSize { width: 4, height: 5 });
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.dimensions().into(),
            GenericImage::La8(img) => img.dimensions().into(),
            GenericImage::Rgb8(img) => img.dimensions().into(),
            GenericImage::Rgba8(img) => img.dimensions().into(),
        }
    }

    /// The number of columns (width) of the image.
    pub fn cols(&self) -> usize {
        self.size().width
    }

    /// The number of rows (height) of the image.
    pub fn rows(&self) -> usize {
        self.size().height
    }

    /// The number of channels per pixel.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) => 1,
            GenericImage::La8(_) => 2,
            GenericImage::Rgb8(_) => 3,
            GenericImage::Rgba8(_) => 4,
        }
    }

    /// The raw interleaved pixel data.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            GenericImage::L8(img) => img.as_raw(),
            GenericImage::La8(img) => img.as_raw(),
            GenericImage::Rgb8(img) => img.as_raw(),
            GenericImage::Rgba8(img) => img.as_raw(),
        }
    }
}

impl From<DynamicImage> for GenericImage {
    fn from(img: DynamicImage) -> Self {
        let color = img.color();
        match (color.has_color(), color.has_alpha()) {
            (false, false) => GenericImage::L8(img.into_luma8()),
            (false, true) => GenericImage::La8(img.into_luma_alpha8()),
            (true, false) => GenericImage::Rgb8(img.into_rgb8()),
            (true, true) => GenericImage::Rgba8(img.into_rgba8()),
        }
    }
}

impl From<GenericImage> for DynamicImage {
    fn from(img: GenericImage) -> Self {
        match img {
            GenericImage::L8(img) => DynamicImage::ImageLuma8(img),
            GenericImage::La8(img) => DynamicImage::ImageLumaA8(img),
            GenericImage::Rgb8(img) => DynamicImage::ImageRgb8(img),
            GenericImage::Rgba8(img) => DynamicImage::ImageRgba8(img),
        }
    }
}

impl From<GrayImage> for GenericImage {
    fn from(img: GrayImage) -> Self {
        GenericImage::L8(img)
    }
}

impl From<GrayAlphaImage> for GenericImage {
    fn from(img: GrayAlphaImage) -> Self {
        GenericImage::La8(img)
    }
}

impl From<RgbImage> for GenericImage {
    fn from(img: RgbImage) -> Self {
        GenericImage::Rgb8(img)
    }
}

impl From<RgbaImage> for GenericImage {
    fn from(img: RgbaImage) -> Self {
        GenericImage::Rgba8(img)
    }
}

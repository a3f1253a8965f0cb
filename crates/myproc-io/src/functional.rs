use std::{io::Cursor, path::Path};

use image::ImageFormat;
use myproc_image::GenericImage;

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
/// The format is guessed from the file content, falling back to the extension.
/// The channel layout of the file is preserved, including the alpha channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] when the path does not exist and
/// [`IoError::ImageDecodeError`] when the content cannot be decoded.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    // resolve the file path correctly
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()
        .map_err(IoError::ImageDecodeError)?;

    let image = GenericImage::from(img);

    log::debug!(
        "decoded {}: {} with {} channels",
        file_path.display(),
        image.size(),
        image.num_channels()
    );

    Ok(image)
}

/// Writes an image to the given file path.
///
/// The output format is selected from the file extension. The image is fully
/// encoded in memory before anything touches the disk, so a failed encoding
/// never leaves a partial file behind.
///
/// # Arguments
///
/// * `file_path` - The path of the output image.
/// * `image` - The image to encode.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFileExtension`] when the extension is unknown,
/// [`IoError::ImageEncodeError`] when the format cannot encode this image and
/// [`IoError::FileError`] when the file cannot be written.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = ImageFormat::from_path(file_path)
        .map_err(|_| IoError::UnsupportedFileExtension(file_path.to_path_buf()))?;

    // compress the image
    let mut buffer = Cursor::new(Vec::new());
    match image {
        GenericImage::L8(img) => img.write_to(&mut buffer, format),
        GenericImage::La8(img) => img.write_to(&mut buffer, format),
        GenericImage::Rgb8(img) => img.write_to(&mut buffer, format),
        GenericImage::Rgba8(img) => img.write_to(&mut buffer, format),
    }
    .map_err(IoError::ImageEncodeError)?;

    // write the data directly to a file
    std::fs::write(file_path, buffer.into_inner())?;

    log::debug!(
        "encoded {} as {:?}: {}",
        file_path.display(),
        format,
        image.size()
    );

    Ok(())
}

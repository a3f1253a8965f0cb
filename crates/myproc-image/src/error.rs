/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the image has a channel count the operation cannot handle.
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    /// Error when a row or column index falls outside the image.
    #[error("Line index {index} is out of bounds for length {len}")]
    LineIndexOutOfBounds {
        /// The requested row or column.
        index: usize,
        /// The number of rows or columns in the image.
        len: usize,
    },

    /// Error when the gaussian sigma is not positive or exceeds the supported maximum.
    #[error("Invalid gaussian sigma: {0}")]
    InvalidSigma(f64),
}

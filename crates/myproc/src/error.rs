use myproc_image::ImageError;
use myproc_io::IoError;

use crate::args::ArgsError;

/// Exit code of a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code of a bad or missing argument.
pub const EXIT_USAGE: u8 = 1;

/// Exit code of an input that cannot be read.
pub const EXIT_READ: u8 = 2;

/// Exit code of an output that cannot be written.
pub const EXIT_WRITE: u8 = 3;

/// Exit code of a failed transform.
pub const EXIT_PROCESSING: u8 = 4;

/// Exit code of anything unclassified, such as a panic.
pub const EXIT_UNKNOWN: u8 = 99;

/// The error type of a myproc run.
#[derive(thiserror::Error, Debug)]
pub enum MyProcError {
    /// Bad or missing command line arguments.
    #[error(transparent)]
    Usage(#[from] ArgsError),

    /// The input image could not be read or decoded.
    #[error("Failed to read image: {0}")]
    Read(#[source] IoError),

    /// The output image could not be encoded or written.
    #[error("Failed to write: {0}")]
    Write(#[source] IoError),

    /// The transform rejected the image.
    #[error(transparent)]
    Processing(#[from] ImageError),

    /// The transform finished without an image to write.
    #[error("No output produced.")]
    NoOutputProduced,
}

impl MyProcError {
    /// The process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MyProcError::Usage(_) => EXIT_USAGE,
            MyProcError::Read(_) => EXIT_READ,
            MyProcError::Write(_) => EXIT_WRITE,
            MyProcError::Processing(_) | MyProcError::NoOutputProduced => EXIT_PROCESSING,
        }
    }

    /// Whether the usage text should accompany this error.
    pub fn shows_usage(&self) -> bool {
        match self {
            MyProcError::Usage(err) => err.shows_usage(),
            _ => false,
        }
    }
}

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Command line parsing into a validated configuration.
pub mod args;

/// Operation dispatch over the read, normalize, transform and write stages.
pub mod dispatch;

/// Error types and process exit codes.
pub mod error;

/// Row and column profile export.
pub mod profile;

#[doc(inline)]
pub use myproc_image as image;

#[doc(inline)]
pub use myproc_imgproc as imgproc;

#[doc(inline)]
pub use myproc_io as io;

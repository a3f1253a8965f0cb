#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// channel count normalization module.
pub mod color;

/// edge detection module.
pub mod edges;

/// image filtering module.
pub mod filter;

/// row and column intensity profiles.
pub mod profile;

/// operations to threshold images.
pub mod threshold;

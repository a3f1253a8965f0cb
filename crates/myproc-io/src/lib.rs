#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level image reading and writing functions.
pub mod functional;

pub use crate::error::IoError;

//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch driver
//! needs: identify (oriented dimensions, no full decode) and fit (decode,
//! normalize, resize, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), pure Rust and statically
//! linked.

use super::params::FitParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation, after EXIF orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get display dimensions, i.e. with EXIF rotation applied.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Load, orient, flatten to RGB, fit to the target size, and write JPEG.
    fn fit(&self, params: &FitParams) -> Result<(), BackendError>;
}

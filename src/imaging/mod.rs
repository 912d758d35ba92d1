//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageDecoder::dimensions` + EXIF orientation |
//! | **Target choice** | [`choose_target`] over [`TARGETS`] |
//! | **Normalize** | alpha composited onto white, everything else → RGB8 |
//! | **Fit** | Lanczos3 to target width, then vertical crop or letterbox |
//! | **Encode** | progressive JPEG via `jpeg-encoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for target and fit math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Transform**: Pixel-level normalize and fit on in-memory buffers
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;
pub mod transform;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    TARGETS, VerticalFit, calculate_fit_height, choose_target, plan_vertical_fit, target_score,
};
pub use operations::{ResizeConfig, ResizedImage, get_dimensions, plan_resize, resize_for_store};
pub use params::{FitParams, PadColor, Quality};
pub use rust_backend::RustBackend;
pub use transform::{ColorMode, fit, normalize};

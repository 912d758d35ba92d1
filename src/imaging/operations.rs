//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::choose_target;
use super::params::{FitParams, PadColor, Quality};
use crate::naming::{output_file_name, source_stem};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get oriented image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok(dims.as_tuple())
}

/// Encoding options shared by every screenshot in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeConfig {
    pub quality: Quality,
    pub pad: PadColor,
}

/// What happened to one screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedImage {
    pub source: PathBuf,
    /// Oriented source dimensions.
    pub source_dims: (u32, u32),
    pub target: (u32, u32),
    pub output: PathBuf,
}

/// Plan a fit operation without executing it.
///
/// Picks the catalog target for `source_dims` and names the output after it.
pub fn plan_resize(
    source: &Path,
    source_dims: (u32, u32),
    output_dir: &Path,
    config: &ResizeConfig,
) -> FitParams {
    let (width, height) = choose_target(source_dims.0, source_dims.1);
    let output = output_dir.join(output_file_name(&source_stem(source), (width, height)));

    FitParams {
        source: source.to_path_buf(),
        output,
        width,
        height,
        pad: config.pad,
        quality: config.quality,
    }
}

/// Resize one screenshot to its nearest store size and write it to `output_dir`.
pub fn resize_for_store(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    config: &ResizeConfig,
) -> Result<ResizedImage> {
    let source_dims = get_dimensions(backend, source)?;
    let params = plan_resize(source, source_dims, output_dir, config);
    log::debug!(
        "{}: {}x{} -> {}x{}",
        source.display(),
        source_dims.0,
        source_dims.1,
        params.width,
        params.height
    );

    backend.fit(&params)?;

    Ok(ResizedImage {
        source: params.source,
        source_dims,
        target: (params.width, params.height),
        output: params.output,
    })
}

//! Batch driver.
//!
//! Takes a resolved [`RunConfig`], finds the screenshots in the input
//! directory, and resizes each one to its nearest App Store size.
//!
//! ## Flow
//!
//! ```text
//! collect_inputs(in_dir)        sorted .png/.jpg/.jpeg files
//!   └─ empty?  → ProcessError::NoImages (nothing is created)
//! create_dir_all(out_dir)
//! for each file, in order:
//!   identify → choose_target → fit → write {stem}_{w}x{h}.jpg
//! ```
//!
//! ## Sequential by design
//!
//! Files are handled one at a time on the calling thread. Each decoded buffer
//! is dropped before the next file is opened, so peak memory is bounded by
//! the largest single screenshot. Progress is reported through a callback
//! invoked synchronously after every step.
//!
//! ## Failure
//!
//! The first error aborts the run. Files already written stay on disk; there
//! is no retry and no resume.

use crate::config::RunConfig;
use crate::imaging::{BackendError, ImageBackend, ResizedImage, RustBackend, resize_for_store};
use crate::scan::{self, ScanError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Inputs were found; processing is about to begin.
    Started { in_dir: PathBuf, image_count: usize },
    /// One screenshot was written. `index` is 1-based.
    ImageProcessed { index: usize, image: ResizedImage },
    /// Every screenshot was written.
    Finished { out_dir: PathBuf, image_count: usize },
}

/// Summary of a completed batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    pub out_dir: PathBuf,
    pub images: Vec<ResizedImage>,
}

/// Process a batch with the production backend.
pub fn process(
    config: &RunConfig,
    on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, config, on_event)
}

/// Process a batch using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &RunConfig,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<ProcessResult, ProcessError> {
    let inputs = scan::collect_inputs(&config.in_dir)?;
    if inputs.is_empty() {
        return Err(ProcessError::NoImages(config.in_dir.clone()));
    }

    std::fs::create_dir_all(&config.out_dir)?;
    let out_dir = std::fs::canonicalize(&config.out_dir)?;
    log::debug!(
        "Writing {} image(s) to {} at quality {}",
        inputs.len(),
        out_dir.display(),
        config.resize.quality.value()
    );

    on_event(&ProcessEvent::Started {
        in_dir: config.in_dir.clone(),
        image_count: inputs.len(),
    });

    let mut images = Vec::with_capacity(inputs.len());
    for (i, path) in inputs.iter().enumerate() {
        let image = resize_for_store(backend, path, &out_dir, &config.resize)?;
        on_event(&ProcessEvent::ImageProcessed {
            index: i + 1,
            image: image.clone(),
        });
        images.push(image);
    }

    on_event(&ProcessEvent::Finished {
        out_dir: out_dir.clone(),
        image_count: images.len(),
    });

    Ok(ProcessResult { out_dir, images })
}

//! Run configuration.
//!
//! There are no config files: everything comes from the command line. This
//! module turns raw CLI values into a [`RunConfig`] with absolute directories
//! and clamped encoder settings, so the rest of the pipeline never has to
//! re-validate them.
//!
//! | Field | CLI flag | Default |
//! |---|---|---|
//! | `in_dir` | `--in-dir` | `.` |
//! | `out_dir` | `--out-dir` | `resized` |
//! | `resize.quality` | `--quality` | `95`, clamped to 1–100 |
//! | `resize.pad` | `--pad-color` | `#FFFFFF` |

use crate::imaging::{PadColor, Quality, ResizeConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_IN_DIR: &str = ".";
pub const DEFAULT_OUT_DIR: &str = "resized";
pub const DEFAULT_QUALITY: i64 = 95;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot resolve path '{path}': {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Fully resolved settings for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Absolute input directory.
    pub in_dir: PathBuf,
    /// Absolute output directory (may not exist yet).
    pub out_dir: PathBuf,
    pub resize: ResizeConfig,
}

impl RunConfig {
    /// Resolve raw CLI values.
    ///
    /// Directories that already exist are canonicalized (`..` and symlinks
    /// resolved). Missing ones are made absolute against the current working
    /// directory, so the scan can report them. `quality` is clamped.
    pub fn resolve(
        in_dir: &Path,
        out_dir: &Path,
        quality: i64,
        pad: PadColor,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            in_dir: resolve_dir(in_dir)?,
            out_dir: resolve_dir(out_dir)?,
            resize: ResizeConfig {
                quality: Quality::new(quality),
                pad,
            },
        })
    }
}

fn resolve_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let resolved = if path.exists() {
        std::fs::canonicalize(path)
    } else {
        std::path::absolute(path)
    };
    resolved.map_err(|source| ConfigError::Path {
        path: path.to_path_buf(),
        source,
    })
}

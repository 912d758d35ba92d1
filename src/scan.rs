//! Input discovery.
//!
//! Lists the screenshots in a single input directory. The scan is flat (no
//! recursion) and keeps only regular files whose extension is `.png`, `.jpg`
//! or `.jpeg`, compared case-insensitively:
//!
//! ```text
//! shots/
//! ├── 01-home.PNG        ✓
//! ├── 02-detail.jpg      ✓
//! ├── 03-settings.jpeg   ✓
//! ├── notes.txt          ✗ wrong extension
//! ├── cover.webp         ✗ unsupported format
//! └── drafts.png/        ✗ directory
//! ```
//!
//! Results are sorted by path so every run processes files in the same order.

use crate::imaging::rust_backend::is_supported_input;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Collect supported image files directly inside `dir`, sorted by path.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_supported_input(p))
        .collect();

    inputs.sort();
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn collects_supported_files_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.jpg", "a.PNG", "c.jpeg", "notes.txt", "cover.webp", "README"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }

        let inputs = collect_inputs(tmp.path()).unwrap();
        assert_eq!(file_names(&inputs), vec!["a.PNG", "b.jpg", "c.jpeg"]);
    }

    #[test]
    fn skips_directories_with_image_extensions() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("drafts.png")).unwrap();
        fs::write(tmp.path().join("real.png"), b"x").unwrap();

        let inputs = collect_inputs(tmp.path()).unwrap();
        assert_eq!(file_names(&inputs), vec!["real.png"]);
    }

    #[test]
    fn does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("inner.png"), b"x").unwrap();

        assert!(collect_inputs(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_inputs(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_errors() {
        let tmp = TempDir::new().unwrap();
        let result = collect_inputs(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }
}

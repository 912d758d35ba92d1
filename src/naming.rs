//! Output filename convention.
//!
//! Every resized screenshot is written as `{stem}_{width}x{height}.jpg`, where
//! `stem` is the source filename without its extension and the dimensions are
//! the chosen target:
//! - `home.png` at 2064x2752 → `home_2064x2752.jpg`
//! - `01 Settings.JPEG` at 2732x2048 → `01 Settings_2732x2048.jpg`
//!
//! The extension is always lowercase `.jpg`, whatever the input format.

use std::path::Path;

/// Build the output filename for a source stem and target size.
pub fn output_file_name(stem: &str, target: (u32, u32)) -> String {
    format!("{}_{}x{}.jpg", stem, target.0, target.1)
}

/// The filename stem of `path`, lossily decoded.
///
/// Falls back to the whole filename, then to `"image"`, for paths without a
/// usable stem.
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

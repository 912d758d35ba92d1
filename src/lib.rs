//! # Store Shots
//!
//! Resizes a folder of screenshots to the exact pixel sizes App Store Connect
//! accepts for iPad listings, writing one JPEG per input.
//!
//! # Pipeline
//!
//! ```text
//! in_dir/*.png|jpg|jpeg
//!   → identify      oriented width x height
//!   → choose        nearest of the four catalog sizes
//!   → normalize     flatten alpha onto white, convert to RGB8
//!   → fit           scale to target width, crop or letterbox vertically
//!   → encode        progressive JPEG → out_dir/{stem}_{w}x{h}.jpg
//! ```
//!
//! Files are processed one at a time; the first failure stops the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists supported images in the input directory |
//! | [`process`] | Sequential batch driver with progress events |
//! | [`imaging`] | Target selection, normalize/fit transforms, decode and encode |
//! | [`naming`] | `{stem}_{w}x{h}.jpg` output names |
//! | [`config`] | Resolves CLI values into a [`config::RunConfig`] |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Aspect First, Size Second
//!
//! A screenshot that is cropped to the wrong aspect ratio loses content, while
//! one scaled to the wrong size only loses sharpness. Target selection
//! therefore ranks candidates by log aspect-ratio mismatch and only looks at
//! relative pixel distance among equally good aspects. See
//! [`imaging::choose_target`].
//!
//! ## Width Is Never Cropped
//!
//! Screenshots carry UI chrome at the left and right edges. The fit step
//! always scales to the full target width and only adjusts the height,
//! trimming equally from top and bottom or padding with a letterbox color.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding uses the `image` crate and encoding uses `jpeg-encoder`, both pure
//! Rust. The binary has no runtime dependency on libjpeg or ImageMagick.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;

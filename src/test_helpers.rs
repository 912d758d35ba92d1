//! Shared test utilities: synthetic screenshots written to disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let shot = tmp.path().join("home.jpg");
//! create_test_jpeg(&shot, 200, 150);
//!
//! let rotated = tmp.path().join("portrait.jpg");
//! create_oriented_jpeg(&rotated, 64, 32, 6); // displays as 32x64
//! ```

use image::{ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

// =========================================================================
// Pixel sources
// =========================================================================

/// RGB gradient: red follows x, green follows y.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

// =========================================================================
// Files on disk
// =========================================================================

/// Write a baseline JPEG with a gradient.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a fully transparent RGBA PNG.
pub fn create_transparent_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
        .save(path)
        .unwrap();
}

/// Write an indexed PNG with a `tRNS` chunk.
///
/// The image is a single row with one pixel per entry of `indices`.
pub fn create_palette_png(path: &Path, palette: &[[u8; 3]], alphas: &[u8], indices: &[u8]) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), indices.len() as u32, 1);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.concat());
    encoder.set_trns(alphas.to_vec());
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(indices).unwrap();
    writer.finish().unwrap();
}

/// Write a flat gray JPEG carrying an EXIF orientation tag.
///
/// `width` x `height` is the stored size; orientations 5–8 display rotated.
pub fn create_oriented_jpeg(path: &Path, width: u16, height: u16, orientation: u16) {
    // Big-endian TIFF with a single IFD0 entry: 0x0112 SHORT x1
    let mut exif = b"Exif\0\0MM\0\x2a\0\0\0\x08\0\x01\x01\x12\0\x03\0\0\0\x01".to_vec();
    exif.extend_from_slice(&orientation.to_be_bytes());
    exif.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let pixels = vec![90u8; width as usize * height as usize * 3];
    let mut encoder = jpeg_encoder::Encoder::new_file(path, 90).unwrap();
    encoder.add_app_segment(1, &exif).unwrap();
    encoder
        .encode(&pixels, width, height, jpeg_encoder::ColorType::Rgb)
        .unwrap();
}

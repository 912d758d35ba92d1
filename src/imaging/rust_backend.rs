//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image` crate decoders via `ImageReader::into_decoder` |
//! | EXIF orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Flatten to RGB | [`transform::normalize`](super::transform::normalize) |
//! | Resize + crop/pad | [`transform::fit`](super::transform::fit) (Lanczos3) |
//! | Encode → JPEG | `jpeg-encoder` (progressive, optimized Huffman tables) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{FitParams, Quality};
use super::transform;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage};
use std::io::Write;
use std::path::Path;

/// Input extensions the batch accepts, with the decoder each one maps to.
const INPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
];

/// Returns the lowercase file extensions accepted as input.
pub fn supported_input_extensions() -> Vec<&'static str> {
    INPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
}

/// Whether `path` has one of the supported extensions (case-insensitive).
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

/// Pure Rust backend using the `image` crate plus `jpeg-encoder`.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, e: image::ImageError) -> BackendError {
    BackendError::Decode(format!("{}: {}", path.display(), e))
}

fn open_decoder(path: &Path) -> Result<impl ImageDecoder, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()
        .map_err(|e| decode_error(path, e))
}

/// EXIF orientation of the image, or no transform when it can't be read.
fn read_orientation(decoder: &mut impl ImageDecoder, path: &Path) -> Orientation {
    decoder.orientation().unwrap_or_else(|e| {
        log::warn!(
            "Ignoring unreadable EXIF orientation in {}: {}",
            path.display(),
            e
        );
        Orientation::NoTransforms
    })
}

/// Size after applying `orientation`; quarter turns swap the axes.
pub(crate) fn oriented_dimensions(raw: (u32, u32), orientation: Orientation) -> (u32, u32) {
    match orientation {
        Orientation::Rotate90
        | Orientation::Rotate270
        | Orientation::Rotate90FlipH
        | Orientation::Rotate270FlipH => (raw.1, raw.0),
        _ => raw,
    }
}

/// Load and decode an image from disk, upright according to its EXIF data.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let mut decoder = open_decoder(path)?;
    let orientation = read_orientation(&mut decoder, path);
    let mut img = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(path, e))?;
    if orientation != Orientation::NoTransforms {
        log::debug!("Applying {:?} to {}", orientation, path.display());
        img.apply_orientation(orientation);
    }
    Ok(img)
}

/// Save an RGB image to the given path, inferring format from extension.
fn save_image(img: &RgbImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => save_jpeg(img, path, quality),
        other => Err(BackendError::Encode(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

/// Encode and save as progressive JPEG with optimized Huffman tables.
fn save_jpeg(img: &RgbImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let too_large = || {
        BackendError::Encode(format!(
            "{}x{} exceeds the JPEG size limit",
            img.width(),
            img.height()
        ))
    };
    let width = u16::try_from(img.width()).map_err(|_| too_large())?;
    let height = u16::try_from(img.height()).map_err(|_| too_large())?;

    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    let mut encoder = jpeg_encoder::Encoder::new(&mut writer, quality.value());
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder
        .encode(img.as_raw(), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| BackendError::Encode(format!("{}: {}", path.display(), e)))?;
    // The encoder stops at EOI; the buffered tail still has to reach the file
    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let mut decoder = open_decoder(path)?;
        let raw = decoder.dimensions();
        let orientation = read_orientation(&mut decoder, path);
        Ok(oriented_dimensions(raw, orientation).into())
    }

    fn fit(&self, params: &FitParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        log::debug!(
            "Decoded {} as {:?} {}x{}",
            params.source.display(),
            img.color(),
            img.width(),
            img.height()
        );

        let rgb = transform::normalize(img);
        let fitted = transform::fit(rgb, params.width, params.height, params.pad);
        save_image(&fitted, &params.output, params.quality)
    }
}

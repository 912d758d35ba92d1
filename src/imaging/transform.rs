//! Pixel-level transforms: color normalization and fit-to-target.
//!
//! Both functions take ownership of their input buffer so that the common
//! cases (already RGB, already the right size) return it without a copy.

use super::calculations::{VerticalFit, calculate_fit_height, plan_vertical_fit};
use super::params::PadColor;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

/// Pixel format category, as far as normalization is concerned.
///
/// Palette PNGs never show up here: the decoder expands them to RGB or RGBA
/// (the latter when a `tRNS` chunk is present), so they fall into
/// [`Rgb`](ColorMode::Rgb) or [`Alpha`](ColorMode::Alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit RGB, already in output form.
    Rgb,
    /// Any format with an alpha channel (RGBA, LA, 16-bit and float variants).
    Alpha,
    /// Any other opaque format (grayscale, 16-bit RGB, float RGB).
    Opaque,
}

impl ColorMode {
    pub fn of(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgb8(_) => ColorMode::Rgb,
            other if other.color().has_alpha() => ColorMode::Alpha,
            _ => ColorMode::Opaque,
        }
    }
}

/// Flatten an image of any color mode to opaque 8-bit RGB.
///
/// Transparent regions are composited onto white.
pub fn normalize(image: DynamicImage) -> RgbImage {
    match ColorMode::of(&image) {
        ColorMode::Rgb | ColorMode::Opaque => image.into_rgb8(),
        ColorMode::Alpha => flatten_alpha(&image.into_rgba8(), PadColor::WHITE),
    }
}

/// Composite RGBA pixels over a solid background, dropping the alpha channel.
pub fn flatten_alpha(image: &RgbaImage, background: PadColor) -> RgbImage {
    let [br, bg, bb] = background.0;
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        Rgb([blend(r, br, a), blend(g, bg, a), blend(b, bb, a)])
    })
}

/// `(fg * a + bg * (255 - a)) / 255`, rounded to nearest.
#[inline]
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let t = u32::from(fg) * a + u32::from(bg) * (255 - a) + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Resize to exactly `width` x `height` without cropping horizontally.
///
/// The image is scaled (Lanczos3) so its width equals `width`, then the
/// height is center-cropped or letterboxed with `pad`.
pub fn fit(image: RgbImage, width: u32, height: u32, pad: PadColor) -> RgbImage {
    let fitted_height = calculate_fit_height(image.dimensions(), width);

    let resized = if image.dimensions() == (width, fitted_height) {
        image
    } else {
        imageops::resize(&image, width, fitted_height, FilterType::Lanczos3)
    };

    match plan_vertical_fit(fitted_height, height) {
        VerticalFit::Exact => resized,
        VerticalFit::Crop { top } => {
            imageops::crop_imm(&resized, 0, top, width, height).to_image()
        }
        VerticalFit::Pad { top } => {
            let mut canvas = RgbImage::from_pixel(width, height, Rgb(pad.0));
            imageops::replace(&mut canvas, &resized, 0, i64::from(top));
            canvas
        }
    }
}

//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the target for each screenshot) and the
//! [`backend`](super::backend) (which does the pixel work). Keeping them apart
//! lets the batch driver run against a mock backend in tests.
//!
//! ## Types
//!
//! - [`Quality`]: JPEG encoding quality (1–100, default 95). Clamped on construction.
//! - [`PadColor`]: Letterbox fill color, default opaque white.
//! - [`FitParams`]: Everything needed to process one screenshot: source, output, target size, pad, quality.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    /// Clamp an arbitrary integer into the valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Opaque RGB color used to fill letterbox bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadColor(pub [u8; 3]);

impl PadColor {
    pub const WHITE: PadColor = PadColor([255, 255, 255]);
}

impl Default for PadColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for PadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for PadColor {
    type Err = String;

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a #RRGGBB color, got '{s}'"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("invalid hex digits in color '{s}'"))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

/// Parameters for fitting one screenshot to a target size and writing it as JPEG.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pad: PadColor,
    pub quality: Quality,
}

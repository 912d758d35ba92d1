//! Pure calculation functions for target selection and fit geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use std::cmp::Ordering;

/// App Store Connect iPad screenshot sizes, as (width, height).
///
/// Portrait and landscape for the 13" class (2064x2752) and the 12.9" class
/// (2048x2732). Order matters: ties resolve to the earlier entry.
pub const TARGETS: [(u32, u32); 4] = [(2064, 2752), (2752, 2064), (2048, 2732), (2732, 2048)];

/// Score a candidate target against a source size.
///
/// Returns `(aspect_mismatch, pixel_distance)`:
/// - `aspect_mismatch` is `|ln(src_aspect / target_aspect)|`, symmetric in
///   which side is larger.
/// - `pixel_distance` is the Euclidean norm of the per-axis differences,
///   each relative to the target's own size.
pub fn target_score(source: (u32, u32), target: (u32, u32)) -> (f64, f64) {
    let (w, h) = (source.0 as f64, source.1 as f64);
    let (tw, th) = (target.0 as f64, target.1 as f64);

    let aspect_mismatch = ((w / h) / (tw / th)).ln().abs();
    let pixel_distance = ((w - tw) / tw).hypot((h - th) / th);

    (aspect_mismatch, pixel_distance)
}

fn compare_scores(a: (f64, f64), b: (f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

/// Choose the catalog target that best matches a source size.
///
/// Aspect fit dominates; relative pixel distance only ranks candidates with
/// the same aspect mismatch. Both dimensions must be non-zero.
///
/// # Examples
/// ```
/// # use store_shots::imaging::choose_target;
/// // Exactly 4:3 landscape matches the 2752x2064 entry.
/// assert_eq!(choose_target(2048, 1536), (2752, 2064));
///
/// // Retina 12.9" portrait at half scale.
/// assert_eq!(choose_target(1024, 1366), (2048, 2732));
/// ```
pub fn choose_target(width: u32, height: u32) -> (u32, u32) {
    debug_assert!(width > 0 && height > 0, "zero-sized source");

    // min_by keeps the first of equal elements, so catalog order breaks ties
    TARGETS
        .iter()
        .copied()
        .min_by(|&a, &b| {
            compare_scores(
                target_score((width, height), a),
                target_score((width, height), b),
            )
        })
        .unwrap_or(TARGETS[0])
}

/// Height after scaling `source` isotropically to `target_width`.
///
/// Rounds half to even and never returns less than one row.
///
/// # Examples
/// ```
/// # use store_shots::imaging::calculate_fit_height;
/// assert_eq!(calculate_fit_height((1000, 1500), 2064), 3096);
/// ```
pub fn calculate_fit_height(source: (u32, u32), target_width: u32) -> u32 {
    let (src_w, src_h) = source;
    let scale = target_width as f64 / src_w as f64;
    ((src_h as f64 * scale).round_ties_even() as u32).max(1)
}

/// How a width-fitted image reaches the target height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalFit {
    /// Fitted height already equals the target.
    Exact,
    /// Keep `target_height` rows starting at row `top`.
    Crop { top: u32 },
    /// Paste onto a padded canvas with `top` rows of padding above.
    Pad { top: u32 },
}

/// Decide between crop and letterbox for a fitted height.
///
/// Offsets use floor division, so for odd differences the bottom edge gets
/// the extra row.
pub fn plan_vertical_fit(fitted_height: u32, target_height: u32) -> VerticalFit {
    match fitted_height.cmp(&target_height) {
        Ordering::Equal => VerticalFit::Exact,
        Ordering::Greater => VerticalFit::Crop {
            top: (fitted_height - target_height) / 2,
        },
        Ordering::Less => VerticalFit::Pad {
            top: (target_height - fitted_height) / 2,
        },
    }
}

//! Shift-tolerant pixel difference between binary masks
//!
//! The metric is deliberately asymmetric: disagreement is normalised by the
//! ink of the first argument only, so `difference(a, b)` answers "what
//! fraction of `a` fails to line up with `b`".

use crate::spatial::{Direction, PixelGrid};

/// Difference without shift tolerance
///
/// Returns `|a xor b| / |a|`. When `a` has no ink the result is the ink
/// fraction of `b` instead. Grids with different dimensions are never
/// comparable and yield `f64::INFINITY`.
pub fn raw_difference(a: &PixelGrid, b: &PixelGrid) -> f64 {
    if a.dimensions() != b.dimensions() {
        return f64::INFINITY;
    }

    let ink = a.count();
    if ink == 0 {
        return blank_difference(b);
    }

    a.xor_count(b) as f64 / ink as f64
}

/// Canonical difference: the minimum raw difference over `a` and its four one-cell shifts
///
/// Shifts wrap around the grid borders. Shifting preserves the ink count, so
/// every candidate is normalised by the same denominator.
pub fn difference(a: &PixelGrid, b: &PixelGrid) -> f64 {
    if a.dimensions() != b.dimensions() {
        return f64::INFINITY;
    }

    let ink = a.count();
    if ink == 0 {
        return blank_difference(b);
    }

    let best = Direction::ALL
        .iter()
        .map(|&direction| a.roll(direction).xor_count(b))
        .fold(a.xor_count(b), usize::min);

    best as f64 / ink as f64
}

fn blank_difference(b: &PixelGrid) -> f64 {
    let size = b.size();
    if size == 0 {
        0.0
    } else {
        b.count() as f64 / size as f64
    }
}

/// Whether two pixel counts lie strictly within `band` of each other
///
/// The ratio `a / b` must fall inside `(1 - band, 1 + band)`. A zero `b`
/// is never compatible.
pub fn is_size_compatible(a: usize, b: usize, band: f64) -> bool {
    if b == 0 {
        return false;
    }
    let ratio = a as f64 / b as f64;
    1.0 - band < ratio && ratio < 1.0 + band
}

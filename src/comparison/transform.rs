//! Elementary transform classification between two masks
//!
//! Each classifier answers whether `b` looks like a particular transform of
//! `a`, returning `None` for "no match". `classify` chains them in priority
//! order: unchanged, vertical flip, horizontal flip, rotation.

use std::fmt;

use crate::comparison::difference::difference;
use crate::io::configuration::SolverConfig;
use crate::spatial::PixelGrid;

/// How one shape or whole image became another
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransformKind {
    /// Same object within tolerance
    Unchanged,
    /// Mirrored top to bottom
    FlippedVertical,
    /// Mirrored left to right
    FlippedHorizontal,
    /// Quarter turn
    Rotated90,
    /// Half turn
    Rotated180,
    /// Three-quarter turn
    Rotated270,
    /// Outline became solid or the reverse
    Filled,
    /// Present only in the second figure
    Added,
    /// Present only in the first figure
    Deleted,
    /// No transform found
    Unmatched,
}

impl TransformKind {
    /// Upper-case label used in logs and reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unchanged => "UNCHANGED",
            Self::FlippedVertical => "FLIPPED_VERTICAL",
            Self::FlippedHorizontal => "FLIPPED_HORIZONTAL",
            Self::Rotated90 => "ROTATED_90",
            Self::Rotated180 => "ROTATED_180",
            Self::Rotated270 => "ROTATED_270",
            Self::Filled => "FILLED",
            Self::Added => "ADDED",
            Self::Deleted => "DELETED",
            Self::Unmatched => "UNMATCHED",
        }
    }

    /// Whether this kind pairs two shapes with each other
    pub const fn is_correspondence(self) -> bool {
        !matches!(self, Self::Added | Self::Deleted | Self::Unmatched)
    }

    /// Whether this kind is one of the rotations
    pub const fn is_rotation(self) -> bool {
        matches!(self, Self::Rotated90 | Self::Rotated180 | Self::Rotated270)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds consumed by the classifiers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Maximum difference accepted as unchanged
    pub unchanged: f64,
    /// Flip acceptance threshold
    pub flip: f64,
    /// Change in difference that marks a rotation step
    pub rotation_margin: f64,
}

impl Tolerances {
    /// Tolerances for direct shape matching and whole-image labels
    pub const fn strict(config: &SolverConfig) -> Self {
        Self {
            unchanged: config.unchanged_tolerance,
            flip: config.flip_tolerance,
            rotation_margin: config.rotation_margin,
        }
    }

    /// Tolerances for opportunistic relationship net construction
    pub const fn loose(config: &SolverConfig) -> Self {
        Self {
            unchanged: config.net_unchanged_tolerance,
            flip: config.flip_tolerance,
            rotation_margin: config.rotation_margin,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::strict(&SolverConfig::default())
    }
}

/// `Unchanged` when `difference(a, b)` is within the unchanged tolerance
pub fn classify_unchanged(
    a: &PixelGrid,
    b: &PixelGrid,
    tolerances: &Tolerances,
) -> Option<TransformKind> {
    (difference(a, b) <= tolerances.unchanged).then_some(TransformKind::Unchanged)
}

/// `FlippedVertical` when mirroring `a` top to bottom lines it up with `b`
pub fn classify_flip_vertical(
    a: &PixelGrid,
    b: &PixelGrid,
    tolerances: &Tolerances,
) -> Option<TransformKind> {
    classify_flip(a, &a.flip_vertical(), b, tolerances.flip)
        .then_some(TransformKind::FlippedVertical)
}

/// `FlippedHorizontal` when mirroring `a` left to right lines it up with `b`
pub fn classify_flip_horizontal(
    a: &PixelGrid,
    b: &PixelGrid,
    tolerances: &Tolerances,
) -> Option<TransformKind> {
    classify_flip(a, &a.flip_horizontal(), b, tolerances.flip)
        .then_some(TransformKind::FlippedHorizontal)
}

// Near-symmetric masks look the same flipped or not, so the flip must
// improve the fit by at least the tolerance as well as land within it.
fn classify_flip(a: &PixelGrid, flipped: &PixelGrid, b: &PixelGrid, tolerance: f64) -> bool {
    let before = difference(a, b);
    let after = difference(flipped, b);
    after < tolerance && before - after >= tolerance
}

/// Rotation label for the first quarter-turn step whose difference departs from the baseline
///
/// `a` is rotated clockwise up to three times. The first step whose
/// difference from `b` moves away from the unrotated difference by more than
/// the rotation margin is reported. The third step reports `Rotated90`
/// rather than `Rotated270`, preserving the established labelling. Grids
/// that are not square never rotate onto themselves and are not classified.
pub fn classify_rotation(
    a: &PixelGrid,
    b: &PixelGrid,
    tolerances: &Tolerances,
) -> Option<TransformKind> {
    if !a.is_square() || a.dimensions() != b.dimensions() {
        return None;
    }

    let baseline = difference(a, b);
    let mut rotated = a.clone();

    for step in 1..=3 {
        rotated = rotated.rotate_90();
        let current = difference(&rotated, b);
        if (baseline - current).abs() > tolerances.rotation_margin {
            return Some(match step {
                1 | 3 => TransformKind::Rotated90,
                _ => TransformKind::Rotated180,
            });
        }
    }

    None
}

/// Run every classifier in priority order and return the first match
pub fn classify(a: &PixelGrid, b: &PixelGrid, tolerances: &Tolerances) -> Option<TransformKind> {
    classify_unchanged(a, b, tolerances)
        .or_else(|| classify_flip_vertical(a, b, tolerances))
        .or_else(|| classify_flip_horizontal(a, b, tolerances))
        .or_else(|| classify_rotation(a, b, tolerances))
}

//! Solver constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Segmentation
/// Components at or below this many pixels are treated as noise
pub const NOISE_PIXEL_THRESHOLD: usize = 20;

/// Greyscale values at or below this level count as ink when decoding figures
pub const INK_LUMA_THRESHOLD: u8 = 128;

// Transform classification
/// Maximum difference for two masks to count as the same object during shape matching
pub const UNCHANGED_TOLERANCE: f64 = 0.02;

/// Looser unchanged tolerance used while building relationship nets
pub const NET_UNCHANGED_TOLERANCE: f64 = 0.2;

/// Tolerance applied to both the post-flip difference and the flip improvement
pub const FLIP_TOLERANCE: f64 = 0.02;

/// Change in difference that marks a rotation step as significant
pub const ROTATION_MARGIN: f64 = 0.05;

/// Relative pixel-count band within which two shapes may be compared
pub const SIZE_COMPATIBILITY: f64 = 0.05;

// Frames
/// Figures with more shapes than this skip relationship net construction
pub const MAX_NET_SHAPES: usize = 10;

/// Tolerance for the whole-image boolean composition check
pub const COMPOSITION_TOLERANCE: f64 = 0.02;

// Scoring
/// Agreement bands for graduated point awards, tightest first
pub const AGREEMENT_BANDS: [f64; 3] = [0.05, 0.10, 0.15];

/// Points awarded for each agreement band, aligned with `AGREEMENT_BANDS`
pub const AGREEMENT_POINTS: [f64; 3] = [3.0, 2.0, 1.0];

/// Starting score of every frame comparison
pub const BASE_FRAME_SCORE: f64 = 1.0;

/// Points for matching non-zero shape-count deltas
pub const SHAPE_DELTA_POINTS: f64 = 5.0;

/// Points for matching whole-image transform labels
pub const SIMPLE_TRANSFORM_POINTS: f64 = 5.0;

/// Points for matching boolean compositions
pub const COMPOSITION_POINTS: f64 = 2.0;

/// Points for a candidate frame whose relationship net is self-consistent
pub const NET_CONSISTENCY_POINTS: f64 = 10.0;

/// Winning scores below this abstain for 2x2 problems
pub const MIN_CONFIDENCE_TWO: f64 = 2.0;

/// Winning scores below this abstain for 3x3 problems
pub const MIN_CONFIDENCE_THREE: f64 = 7.0;

/// Margin the best score must exceed the runner-up by
pub const MIN_SCORE_SEPARATION: f64 = 0.0;

/// Value reported in place of an answer index when the solver abstains
pub const ABSTAIN_SENTINEL: i32 = -1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tunable parameters for segmentation, classification and scoring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Components at or below this pixel count are dropped
    pub noise_threshold: usize,
    /// Unchanged tolerance for direct shape matching
    pub unchanged_tolerance: f64,
    /// Unchanged tolerance for relationship nets
    pub net_unchanged_tolerance: f64,
    /// Flip acceptance tolerance
    pub flip_tolerance: f64,
    /// Rotation detection margin
    pub rotation_margin: f64,
    /// Relative size band for comparable shapes
    pub size_compatibility: f64,
    /// Boolean composition tolerance
    pub composition_tolerance: f64,
    /// Shape limit for relationship nets
    pub max_net_shapes: usize,
    /// Points subtracted for each mismatching signal
    pub mismatch_penalty: f64,
    /// Score floor for 2x2 problems
    pub min_confidence_two: f64,
    /// Score floor for 3x3 problems
    pub min_confidence_three: f64,
    /// Required separation between best and second-best scores
    pub min_score_separation: f64,
    /// Include the diagonal frames when scoring 3x3 problems
    pub diagonal_frames: bool,
    /// Reward candidate frames whose relationship nets are self-consistent
    pub net_consistency_bonus: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            noise_threshold: NOISE_PIXEL_THRESHOLD,
            unchanged_tolerance: UNCHANGED_TOLERANCE,
            net_unchanged_tolerance: NET_UNCHANGED_TOLERANCE,
            flip_tolerance: FLIP_TOLERANCE,
            rotation_margin: ROTATION_MARGIN,
            size_compatibility: SIZE_COMPATIBILITY,
            composition_tolerance: COMPOSITION_TOLERANCE,
            max_net_shapes: MAX_NET_SHAPES,
            mismatch_penalty: 0.0,
            min_confidence_two: MIN_CONFIDENCE_TWO,
            min_confidence_three: MIN_CONFIDENCE_THREE,
            min_score_separation: MIN_SCORE_SEPARATION,
            diagonal_frames: true,
            net_consistency_bonus: false,
        }
    }
}

impl SolverConfig {
    /// Check every numeric field for a usable value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first field that is negative or
    /// not finite, or a size band outside `[0, 1)`
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64); 10] = [
            ("unchanged_tolerance", self.unchanged_tolerance),
            ("net_unchanged_tolerance", self.net_unchanged_tolerance),
            ("flip_tolerance", self.flip_tolerance),
            ("rotation_margin", self.rotation_margin),
            ("size_compatibility", self.size_compatibility),
            ("composition_tolerance", self.composition_tolerance),
            ("mismatch_penalty", self.mismatch_penalty),
            ("min_score_separation", self.min_score_separation),
            ("min_confidence_two", self.min_confidence_two),
            ("min_confidence_three", self.min_confidence_three),
        ];

        for (parameter, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and non-negative",
                ));
            }
        }

        if self.size_compatibility >= 1.0 {
            return Err(invalid_parameter(
                "size_compatibility",
                &self.size_compatibility,
                &"must be below 1.0",
            ));
        }

        Ok(())
    }
}

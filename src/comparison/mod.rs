//! Shape and image comparison

/// Shift-tolerant difference metric
pub mod difference;
/// Cross-figure shape correspondence
pub mod matcher;
/// Elementary transform classifiers
pub mod transform;

pub use difference::difference;
pub use matcher::{MatchContext, ShapeMatcher};
pub use transform::{Tolerances, TransformKind};

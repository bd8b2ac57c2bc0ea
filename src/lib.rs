//! Shape segmentation and analogy scoring for visual matrix reasoning problems
//!
//! Each figure is binarised, split into connected shapes, and compared with
//! its neighbours in the matrix. Whole-image differences, shape-count changes,
//! elementary transforms and boolean compositions observed between known
//! figures are then checked against every answer option, and the option that
//! best continues the pattern is chosen, or the solver abstains.

#![forbid(unsafe_code)]

/// Frames, scoring and answer selection
pub mod analysis;
/// Shape difference, transform classification and correspondence
pub mod comparison;
/// Input/output operations, configuration and error handling
pub mod io;
/// Connected component labeling and shape extraction
pub mod segmentation;
/// Binary grids and component maps
pub mod spatial;

pub use io::error::{AnalysisError, Result};

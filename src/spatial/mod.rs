//! Spatial data structures for binary figures
//!
//! This module contains:
//! - Packed binary pixel grids and their flips, rotations and shifts
//! - Integer component maps produced by segmentation

/// Binary pixel grids and geometric operations
pub mod grid;
/// Component id maps
pub mod labels;

pub use grid::{Direction, PixelGrid};
pub use labels::LabeledGrid;

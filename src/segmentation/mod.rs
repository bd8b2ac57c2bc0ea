//! Segmentation of binary figures into shapes
//!
//! This module contains:
//! - A union-find forest for provisional label reconciliation
//! - Two-pass connected component labeling
//! - Noise-filtered shape extraction
//! - The segmented `Figure` type

/// Segmented figures
pub mod figure;
/// Shape masks and noise filtering
pub mod extraction;
/// Connected component labeling
pub mod labeling;
/// Disjoint-set forest for label classes
pub mod union_find;

pub use extraction::Shape;
pub use figure::Figure;

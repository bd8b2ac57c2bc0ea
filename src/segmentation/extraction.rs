//! Shape extraction from labeled component maps

use log::warn;

use crate::spatial::{LabeledGrid, PixelGrid};

/// One connected ink region isolated into its own mask
///
/// Shapes are immutable once extracted. Matching state lives in a separate
/// `MatchContext` so the same shapes can take part in any number of
/// comparisons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    label: u32,
    name: String,
    mask: PixelGrid,
    pixel_count: usize,
}

impl Shape {
    /// Wrap a mask as a shape originating from component `label`
    pub fn new(label: u32, mask: PixelGrid) -> Self {
        let pixel_count = mask.count();
        Self {
            label,
            name: format!("Shape_{label}"),
            mask,
            pixel_count,
        }
    }

    /// Component id this shape was extracted from
    pub const fn label(&self) -> u32 {
        self.label
    }

    /// Display name, unique within a figure
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mask selecting this shape's pixels
    pub const fn mask(&self) -> &PixelGrid {
        &self.mask
    }

    /// Number of ink pixels in the mask
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }
}

/// Split a labeled map into shapes, dropping components at or below `noise_threshold`
///
/// Shapes come back in ascending label order. Empty ids are skipped silently;
/// non-empty components at or below the threshold are logged because they
/// usually point at under-segmentation or scanning specks.
pub fn extract_shapes(labels: &LabeledGrid, noise_threshold: usize) -> Vec<Shape> {
    let sizes = labels.component_sizes();
    let mut shapes = Vec::new();

    for (id, &size) in sizes.iter().enumerate().skip(1) {
        if size == 0 {
            continue;
        }
        if size <= noise_threshold {
            warn!("Found an object with {size} pixels (label {id}), skipped");
            continue;
        }
        let label = id as u32;
        shapes.push(Shape::new(label, labels.mask_of(label)));
    }

    shapes
}

//! Segmented figures: one binary image with its component map and shapes

use log::debug;

use crate::segmentation::extraction::{Shape, extract_shapes};
use crate::segmentation::labeling::label_components;
use crate::spatial::{LabeledGrid, PixelGrid};

/// A named problem figure after segmentation
///
/// Figures are built once per problem and shared read-only by every frame
/// that references them.
#[derive(Clone, Debug)]
pub struct Figure {
    name: String,
    image: PixelGrid,
    labels: LabeledGrid,
    silhouette: PixelGrid,
    shapes: Vec<Shape>,
}

impl Figure {
    /// Segment `image` into shapes, dropping components at or below `noise_threshold`
    pub fn segment(name: impl Into<String>, image: PixelGrid, noise_threshold: usize) -> Self {
        let name = name.into();
        let labels = label_components(&image);
        let shapes = extract_shapes(&labels, noise_threshold);
        let silhouette = labels.silhouette();

        debug!(
            "Figure {name}: {} components, {} shapes kept",
            labels.component_sizes().iter().skip(1).filter(|&&size| size > 0).count(),
            shapes.len()
        );

        Self {
            name,
            image,
            labels,
            silhouette,
            shapes,
        }
    }

    /// Figure name, e.g. "A" or "3"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original binary image
    pub const fn image(&self) -> &PixelGrid {
        &self.image
    }

    /// Component map produced by labeling
    pub const fn labels(&self) -> &LabeledGrid {
        &self.labels
    }

    /// All components collapsed to one binary mask, used for whole-image comparison
    pub const fn silhouette(&self) -> &PixelGrid {
        &self.silhouette
    }

    /// Shapes above the noise threshold, in label order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.image.dimensions()
    }
}

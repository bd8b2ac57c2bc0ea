//! Integer component maps produced by segmentation

use ndarray::Array2;
use std::collections::HashMap;

use crate::spatial::grid::PixelGrid;

/// Component id map with the same dimensions as its source grid
///
/// 0 is background; every positive value names one connected ink region.
/// Ids need not be contiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledGrid {
    labels: Array2<u32>,
}

impl LabeledGrid {
    /// Wrap an existing label matrix indexed (row, col)
    pub const fn new(labels: Array2<u32>) -> Self {
        Self { labels }
    }

    /// All-background map
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            labels: Array2::zeros((rows, cols)),
        }
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.labels.dim()
    }

    /// Label at (row, col); out-of-range cells read as background
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.labels.get((row, col)).copied().unwrap_or(0)
    }

    /// Borrow the underlying matrix
    pub const fn labels(&self) -> &Array2<u32> {
        &self.labels
    }

    /// Largest id present, 0 for an empty map
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Pixel count for every id present (index = id, entry 0 = background)
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.max_label() as usize + 1];
        for &label in &self.labels {
            if let Some(size) = sizes.get_mut(label as usize) {
                *size += 1;
            }
        }
        sizes
    }

    /// Boolean mask selecting cells carrying `id`
    pub fn mask_of(&self, id: u32) -> PixelGrid {
        let (rows, cols) = self.dimensions();
        PixelGrid::from_fn(rows, cols, |row, col| id != 0 && self.get(row, col) == id)
    }

    /// Collapse every component into a single binary silhouette
    pub fn silhouette(&self) -> PixelGrid {
        let (rows, cols) = self.dimensions();
        PixelGrid::from_fn(rows, cols, |row, col| self.get(row, col) > 0)
    }

    /// Whether both maps group cells into the same components, ignoring id values
    pub fn same_partition(&self, other: &Self) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }

        let mut forward: HashMap<u32, u32> = HashMap::new();
        let mut backward: HashMap<u32, u32> = HashMap::new();

        for (&mine, &theirs) in self.labels.iter().zip(other.labels.iter()) {
            if (mine == 0) != (theirs == 0) {
                return false;
            }
            if mine == 0 {
                continue;
            }
            if *forward.entry(mine).or_insert(theirs) != theirs
                || *backward.entry(theirs).or_insert(mine) != mine
            {
                return false;
            }
        }

        true
    }
}

//! Two-pass connected component labeling over binary grids
//!
//! The forward pass visits cells in row-major order and consults only the
//! neighbours already visited: north, north-east, north-west and west. A cell
//! joins the first inked neighbour in that priority order; when it bridges a
//! north-east component with a west or north-west one, the two classes are
//! merged in the union-find forest. A second pass rewrites every provisional
//! label to its resolved root.

use ndarray::Array2;

use crate::segmentation::union_find::UnionFind;
use crate::spatial::{LabeledGrid, PixelGrid};

/// Label every connected ink region of `grid` with one positive id
///
/// Background stays 0 and the output has the input's dimensions. Ids are
/// union-find roots, so they are unique per component but not contiguous.
pub fn label_components(grid: &PixelGrid) -> LabeledGrid {
    let (rows, cols) = grid.dimensions();
    let mut provisional: Array2<u32> = Array2::zeros((rows, cols));
    let mut forest = UnionFind::new();

    let label_at = |labels: &Array2<u32>, row: usize, col: usize| -> u32 {
        labels.get((row, col)).copied().unwrap_or(0)
    };

    for row in 0..rows {
        for col in 0..cols {
            if !grid.get(row, col) {
                continue;
            }

            let has_north = row > 0;
            let has_west = col > 0;
            let has_east = col + 1 < cols;

            let north = has_north && grid.get(row - 1, col);
            let north_east = has_north && has_east && grid.get(row - 1, col + 1);
            let north_west = has_north && has_west && grid.get(row - 1, col - 1);
            let west = has_west && grid.get(row, col - 1);

            let label = if north {
                label_at(&provisional, row - 1, col)
            } else if north_east {
                let bridge = label_at(&provisional, row - 1, col + 1);
                if north_west {
                    forest.union(bridge, label_at(&provisional, row - 1, col - 1));
                } else if west {
                    forest.union(bridge, label_at(&provisional, row, col - 1));
                }
                bridge
            } else if north_west {
                label_at(&provisional, row - 1, col - 1)
            } else if west {
                label_at(&provisional, row, col - 1)
            } else {
                forest.make_label()
            };

            if let Some(cell) = provisional.get_mut((row, col)) {
                *cell = label;
            }
        }
    }

    forest.flatten();
    provisional.mapv_inplace(|label| if label == 0 { 0 } else { forest.find(label) });

    LabeledGrid::new(provisional)
}

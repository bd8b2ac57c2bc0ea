//! PNG decoding to binary grids and export of grids back to PNG

use crate::io::configuration::INK_LUMA_THRESHOLD;
use crate::io::error::{AnalysisError, Result};
use crate::spatial::PixelGrid;
use image::{GrayImage, Luma};
use std::path::Path;

/// Binarise a greyscale image: luma at or below `threshold` is ink
pub fn grid_from_luma(image: &GrayImage, threshold: u8) -> PixelGrid {
    let (width, height) = image.dimensions();
    PixelGrid::from_fn(height as usize, width as usize, |row, col| {
        image
            .get_pixel_checked(col as u32, row as u32)
            .is_some_and(|pixel| pixel.0[0] <= threshold)
    })
}

/// Load a figure image and binarise it
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_pixel_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let image = image::open(&path_buf).map_err(|e| AnalysisError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(grid_from_luma(&image.to_luma8(), INK_LUMA_THRESHOLD))
}

/// Export a grid as a black-on-white PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<P: AsRef<Path>>(grid: &PixelGrid, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let (rows, cols) = grid.dimensions();

    let img = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        if grid.get(y as usize, x as usize) {
            Luma([0])
        } else {
            Luma([255])
        }
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AnalysisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

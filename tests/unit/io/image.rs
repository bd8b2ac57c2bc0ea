//! Tests for PNG binarisation and shape export

#[cfg(test)]
mod tests {
    use crate::support::{block, grid};
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use ravenmatrix::AnalysisError;
    use ravenmatrix::io::image::{export_grid_as_png, grid_from_luma, load_pixel_grid};
    use tempfile::TempDir;

    // Tests luma at or below the threshold counts as ink
    // Verified by comparing with < instead of <=
    #[test]
    fn test_luma_threshold_is_inclusive() {
        let image = GrayImage::from_fn(3, 1, |x, _| match x {
            0 => Luma([0]),
            1 => Luma([128]),
            _ => Luma([129]),
        });
        let grid = grid_from_luma(&image, 128);

        assert_eq!(grid.dimensions(), (1, 3));
        assert!(grid.get(0, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(0, 2));
    }

    // Tests image width maps to columns and height to rows
    // Verified by swapping width and height
    #[test]
    fn test_non_square_orientation() {
        let image = GrayImage::from_fn(5, 2, |x, y| {
            if x == 4 && y == 1 {
                Luma([0])
            } else {
                Luma([255])
            }
        });
        let grid = grid_from_luma(&image, 128);

        assert_eq!(grid.dimensions(), (2, 5));
        assert_eq!(grid.ink_cells().collect::<Vec<_>>(), vec![(1, 4)]);
    }

    // Tests an exported grid loads back to the same cells
    // Verified by exporting ink as white
    #[test]
    fn test_export_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/shape.png");
        let original = block(12, 2, 3, 4, 5);

        export_grid_as_png(&original, &path).expect("export");
        assert!(path.exists());
        assert_eq!(load_pixel_grid(&path).expect("load"), original);
    }

    // Tests colour figures are binarised through their luma
    // Verified by reading only the red channel
    #[test]
    fn test_load_colour_png() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("A.png");
        let image = RgbaImage::from_fn(3, 2, |x, _| {
            if x == 0 {
                Rgba([0, 0, 255, 255])
            } else {
                Rgba([250, 250, 250, 255])
            }
        });
        image.save(&path).expect("save");

        let loaded = load_pixel_grid(&path).expect("load");
        assert_eq!(loaded, grid(&["#..", "#.."]));
    }

    // Tests a missing file reports the path that failed
    // Verified by mapping load failures to FileSystem
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing.png");

        let result = load_pixel_grid(&path);
        assert!(matches!(
            result,
            Err(AnalysisError::ImageLoad { path: ref failed, .. }) if *failed == path
        ));
    }
}

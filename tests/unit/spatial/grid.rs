//! Tests for packed pixel grids and their geometric operations

#[cfg(test)]
mod tests {
    use crate::support::{block, grid, l_shape};
    use ndarray::Array2;
    use ravenmatrix::spatial::{Direction, PixelGrid};

    // Tests out-of-range reads fall back to background
    // Verified by removing the bounds check in get
    #[test]
    fn test_get_out_of_range_is_background() {
        let grid = block(4, 0, 0, 4, 4);

        assert!(grid.get(3, 3));
        assert!(!grid.get(4, 0));
        assert!(!grid.get(0, 4));
    }

    // Tests set ignores writes outside the grid
    // Verified by indexing without the bounds check
    #[test]
    fn test_set_ignores_out_of_range() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set(1, 2, true);
        grid.set(3, 0, true);

        assert_eq!(grid.count(), 1);
        assert!(grid.get(1, 2));
    }

    // Tests row-major layout for non-square grids
    // Verified by swapping row and column in the index computation
    #[test]
    fn test_non_square_layout() {
        let grid = grid(&["#..", "..#"]);

        assert_eq!(grid.dimensions(), (2, 3));
        assert!(!grid.is_square());
        assert_eq!(grid.ink_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 2)]);
    }

    // Tests ndarray conversion keeps every cell in place
    // Verified by transposing in to_array
    #[test]
    fn test_array_conversion_preserves_cells() {
        let array = Array2::from_shape_fn((3, 5), |(row, col)| (row + col) % 3 == 0);
        let grid = PixelGrid::from_array(&array);

        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.to_array(), array);
    }

    // Tests a blank grid reports no ink
    // Verified by inverting the result of is_blank
    #[test]
    fn test_blank_grid() {
        let grid = PixelGrid::new(5, 5);

        assert!(grid.is_blank());
        assert_eq!(grid.count(), 0);
        assert_eq!(grid.size(), 25);
    }

    // Tests vertical flip mirrors rows and horizontal flip mirrors columns
    // Verified by exchanging the two flip implementations
    #[test]
    fn test_flips_mirror_the_right_axis() {
        let grid = grid(&["##.", "...", "..."]);

        assert_eq!(grid.flip_vertical(), crate::support::grid(&["...", "...", "##."]));
        assert_eq!(
            grid.flip_horizontal(),
            crate::support::grid(&[".##", "...", "..."])
        );
    }

    // Tests a quarter turn is clockwise
    // Verified by reading the source column from the right instead
    #[test]
    fn test_rotate_is_clockwise() {
        let grid = grid(&["#..", "...", "..."]);

        assert_eq!(grid.rotate_90(), crate::support::grid(&["..#", "...", "..."]));
    }

    // Tests rotation swaps the dimensions of non-square grids
    // Verified by constructing the rotated grid with the original dimensions
    #[test]
    fn test_rotate_swaps_dimensions() {
        let grid = grid(&["##.", "..."]);
        let rotated = grid.rotate_90();

        assert_eq!(rotated.dimensions(), (3, 2));
        assert_eq!(rotated, crate::support::grid(&[".#", ".#", ".."]));
    }

    // Tests four quarter turns restore the original
    // Verified by off-by-one in the rotation source index
    #[test]
    fn test_four_rotations_are_identity() {
        let shape = l_shape(20);
        let turned = shape.rotate_90().rotate_90().rotate_90().rotate_90();

        assert_eq!(turned, shape);
        assert_ne!(shape.rotate_90(), shape);
    }

    // Tests roll wraps cells around the borders
    // Verified by clamping instead of wrapping
    #[test]
    fn test_roll_wraps_around() {
        let grid = grid(&["..#", "...", "#.."]);

        assert_eq!(
            grid.roll(Direction::Right),
            crate::support::grid(&["#..", "...", ".#."])
        );
        assert_eq!(
            grid.roll(Direction::Down),
            crate::support::grid(&["#..", "..#", "..."])
        );
        assert_eq!(grid.roll(Direction::Up).roll(Direction::Down), grid);
        assert_eq!(grid.roll(Direction::Left).count(), grid.count());
    }

    // Tests boolean combinations and disagreement counting
    // Verified by using or in place of and
    #[test]
    fn test_boolean_operations() {
        let a = grid(&["##", ".."]);
        let b = grid(&["#.", "#."]);

        assert_eq!(a.and(&b), crate::support::grid(&["#.", ".."]));
        assert_eq!(a.or(&b), crate::support::grid(&["##", "#."]));
        assert_eq!(a.xor(&b), crate::support::grid(&[".#", "#."]));
        assert_eq!(a.xor_count(&b), 2);
    }

    // Tests a block helper lays down exactly the requested rectangle
    // Verified by an off-by-one in the block extent
    #[test]
    fn test_block_pixel_count() {
        let grid = block(20, 2, 3, 4, 5);

        assert_eq!(grid.count(), 20);
        assert!(grid.get(2, 3));
        assert!(grid.get(5, 7));
        assert!(!grid.get(6, 7));
    }
}

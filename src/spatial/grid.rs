//! Packed binary pixel grids with the geometric operations used for comparison
//!
//! A `PixelGrid` is the binary rendering of one figure or one isolated shape.
//! Cells are stored row-major in a bit vector so that cell-wise boolean
//! operations and ink counts run over whole machine words. Every geometric
//! operation returns a new grid; grids are never mutated after construction
//! outside of explicit `set` calls during building.

use bitvec::prelude::*;
use ndarray::Array2;

/// Cardinal direction for one-cell cyclic shifts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];
}

/// Immutable-by-convention boolean matrix where `true` marks an ink cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    bits: BitVec,
}

impl PixelGrid {
    /// Create a grid with no ink
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: bitvec![0; rows * cols],
        }
    }

    /// Build a grid by evaluating `ink` at every (row, col)
    pub fn from_fn(rows: usize, cols: usize, mut ink: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bits = BitVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                bits.push(ink(row, col));
            }
        }
        Self { rows, cols, bits }
    }

    /// Convert from an `ndarray` boolean matrix indexed (row, col)
    pub fn from_array(array: &Array2<bool>) -> Self {
        let (rows, cols) = array.dim();
        Self::from_fn(rows, cols, |row, col| {
            array.get((row, col)).copied().unwrap_or(false)
        })
    }

    /// Convert into an `ndarray` boolean matrix indexed (row, col)
    pub fn to_array(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.rows, self.cols), |(row, col)| self.get(row, col))
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid has as many rows as columns
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Read a cell; out-of-range cells read as background
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.bits
            .get(row * self.cols + col)
            .as_deref()
            .copied()
            .unwrap_or(false)
    }

    /// Write a cell; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, ink: bool) {
        if row < self.rows && col < self.cols {
            self.bits.set(row * self.cols + col, ink);
        }
    }

    /// Number of ink cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether the grid contains no ink
    pub fn is_blank(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate over (row, col) of every ink cell in row-major order
    pub fn ink_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols.max(1);
        self.bits
            .iter_ones()
            .map(move |index| (index / cols, index % cols))
    }

    /// Mirror top to bottom
    #[must_use]
    pub fn flip_vertical(&self) -> Self {
        let last = self.rows.saturating_sub(1);
        Self::from_fn(self.rows, self.cols, |row, col| self.get(last - row, col))
    }

    /// Mirror left to right
    #[must_use]
    pub fn flip_horizontal(&self) -> Self {
        let last = self.cols.saturating_sub(1);
        Self::from_fn(self.rows, self.cols, |row, col| self.get(row, last - col))
    }

    /// Rotate a quarter turn clockwise
    ///
    /// The result has swapped dimensions; only square grids rotate in place.
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        let last = self.rows.saturating_sub(1);
        Self::from_fn(self.cols, self.rows, |row, col| self.get(last - col, row))
    }

    /// Shift every cell one step in `direction`, wrapping at the borders
    #[must_use]
    pub fn roll(&self, direction: Direction) -> Self {
        if self.size() == 0 {
            return self.clone();
        }
        let (rows, cols) = (self.rows, self.cols);
        Self::from_fn(rows, cols, |row, col| match direction {
            Direction::Down => self.get((row + rows - 1) % rows, col),
            Direction::Up => self.get((row + 1) % rows, col),
            Direction::Right => self.get(row, (col + cols - 1) % cols),
            Direction::Left => self.get(row, (col + 1) % cols),
        })
    }

    /// Cell-wise conjunction; both grids must share dimensions
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        Self { bits, ..*self }
    }

    /// Cell-wise disjunction; both grids must share dimensions
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits |= other.bits.as_bitslice();
        Self { bits, ..*self }
    }

    /// Cell-wise exclusive or; both grids must share dimensions
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits ^= other.bits.as_bitslice();
        Self { bits, ..*self }
    }

    /// Number of cells where the two grids disagree
    pub fn xor_count(&self, other: &Self) -> usize {
        self.xor(other).count()
    }
}

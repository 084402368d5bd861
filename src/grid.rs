//! Rectangular value grids.
//!
//! A [`Grid`] is validated once at construction: at least one row, at least
//! one column, and every row the same width. Values are stored row-major in a
//! single buffer so that cell lookup is one multiply-add.

use crate::error::GridError;

/// A grid coordinate `(row, col)`.
pub type Cell = (usize, usize);

/// Immutable, non-empty, rectangular grid of ordered values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows.
    ///
    /// Fails with [`GridError::Empty`] for zero rows, [`GridError::EmptyRow`]
    /// when the first row is empty, and [`GridError::Ragged`] when any row's
    /// width differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let n_rows = rows.len();
        let values: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            values,
        })
    }

    /// Build a grid from row-major values.
    ///
    /// Fails with [`GridError::TooLarge`] when `rows * cols` overflows `usize`
    /// and [`GridError::Shape`] when `values` has the wrong length.
    pub fn from_flat(rows: usize, cols: usize, values: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        if values.len() != expected {
            return Err(GridError::Shape {
                rows,
                cols,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, (r, c): Cell) -> bool {
        r < self.rows && c < self.cols
    }

    /// Row-major index of `cell`.
    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {cell:?} out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        cell.0 * self.cols + cell.1
    }

    /// Value at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> &T {
        &self.values[self.index(cell)]
    }

    /// Row-major slice of all values.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// In-bounds orthogonal neighbors of `cell`, in the order up, left, down, right.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        self.neighbor_slots(cell).into_iter().flatten()
    }

    /// Fixed-size form of [`neighbors`](Self::neighbors); `None` marks an edge.
    #[inline]
    pub fn neighbor_slots(&self, (r, c): Cell) -> [Option<Cell>; 4] {
        let up = (r > 0).then(|| (r - 1, c));
        let left = (c > 0).then(|| (r, c - 1));
        let down = (r + 1 < self.rows).then(|| (r + 1, c));
        let right = (c + 1 < self.cols).then(|| (r, c + 1));
        [up, left, down, right]
    }
}

impl<T: Clone> Grid<T> {
    /// Rotate 90 degrees clockwise. An `R x C` grid becomes `C x R`.
    pub fn rotate_cw(&self) -> Self {
        let mut values = Vec::with_capacity(self.len());
        for r in 0..self.cols {
            for c in 0..self.rows {
                values.push(self.get((self.rows - 1 - c, r)).clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.len());
        for r in 0..self.cols {
            for c in 0..self.rows {
                values.push(self.get((c, r)).clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            values,
        }
    }

    /// Copy back out into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.values.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

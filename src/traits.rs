//! Solver seam.
//!
//! Anything that answers "how long is the longest strictly increasing
//! orthogonal path in this grid" implements [`IncreasingPathSolver`]. The
//! memoized [`PathFinder`](crate::pathfinder::PathFinder) is the production
//! solver; [`BruteForce`](crate::brute::BruteForce) enumerates every path and
//! exists to cross-check it.
//!
//! Contract for implementors:
//! - `longest_len` is at least 1 for every valid grid.
//! - `longest_path` returns exactly `longest_len` cells, each consecutive pair
//!   orthogonally adjacent with strictly increasing values.
//! - Results depend only on the grid; calling twice gives the same answer.

use crate::grid::{Cell, Grid};

pub trait IncreasingPathSolver {
    /// Length, in cells, of the longest strictly increasing path.
    fn longest_len<T: Ord>(&self, grid: &Grid<T>) -> usize;

    /// One longest strictly increasing path.
    fn longest_path<T: Ord>(&self, grid: &Grid<T>) -> Vec<Cell>;
}

/// Check that `path` is a strictly increasing orthogonal walk in `grid`.
///
/// Empty paths are rejected; a grid always admits a single-cell path.
pub fn is_increasing_path<T: Ord>(grid: &Grid<T>, path: &[Cell]) -> bool {
    if path.is_empty() {
        return false;
    }
    if !path.iter().all(|&cell| grid.contains(cell)) {
        return false;
    }
    path.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let adjacent = a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1;
        adjacent && grid.get(a) < grid.get(b)
    })
}

//! Exhaustive reference solver.
//!
//! Enumerates every strictly increasing orthogonal path from every cell with no
//! memoization, tracking visited cells explicitly instead of relying on the
//! acyclicity argument. Exponential in the worst case; intended for small
//! grids when cross-checking [`PathFinder`](crate::pathfinder::PathFinder).

use crate::grid::{Cell, Grid};
use crate::traits::IncreasingPathSolver;

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl BruteForce {
    fn extend<T: Ord>(
        grid: &Grid<T>,
        visited: &mut [bool],
        current: &mut Vec<Cell>,
        best: &mut Vec<Cell>,
    ) {
        if current.len() > best.len() {
            best.clone_from(current);
        }
        let Some(&tail) = current.last() else { return };
        for n in grid.neighbors(tail) {
            let idx = grid.index(n);
            if visited[idx] || grid.get(n) <= grid.get(tail) {
                continue;
            }
            visited[idx] = true;
            current.push(n);
            Self::extend(grid, visited, current, best);
            current.pop();
            visited[idx] = false;
        }
    }
}

impl IncreasingPathSolver for BruteForce {
    fn longest_len<T: Ord>(&self, grid: &Grid<T>) -> usize {
        self.longest_path(grid).len()
    }

    fn longest_path<T: Ord>(&self, grid: &Grid<T>) -> Vec<Cell> {
        let mut visited = vec![false; grid.len()];
        let mut best = Vec::new();
        for start in grid.cells() {
            let idx = grid.index(start);
            visited[idx] = true;
            let mut current = vec![start];
            Self::extend(grid, &mut visited, &mut current, &mut best);
            visited[idx] = false;
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::BruteForce;
    use crate::grid::Grid;
    use crate::traits::{is_increasing_path, IncreasingPathSolver};

    #[test]
    fn finds_whole_row() {
        let g = Grid::from_rows(vec![vec![1, 2, 3, 4]]).unwrap();
        assert_eq!(BruteForce.longest_path(&g), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn flat_grid_is_single_cell() {
        let g = Grid::from_rows(vec![vec![2, 2], vec![2, 2]]).unwrap();
        assert_eq!(BruteForce.longest_len(&g), 1);
    }

    #[test]
    fn path_is_valid() {
        let g = Grid::from_rows(vec![vec![3, 4, 5], vec![3, 2, 6], vec![2, 2, 1]]).unwrap();
        let path = BruteForce.longest_path(&g);
        assert_eq!(path.len(), 4);
        assert!(is_increasing_path(&g, &path));
    }
}

//! Memoized longest-increasing-path search.
//!
//! Orient every edge between orthogonal neighbors from the smaller value to the
//! larger one (equal values get no edge). The result is a DAG, and the longest
//! strictly increasing path starting at a cell is
//!
//! ```text
//! best(u) = 1 + max(0, best(v) for each neighbor v with grid[v] > grid[u])
//! ```
//!
//! [`PathFinder`] resolves `best` for every cell with a depth-first post-order
//! traversal and a per-call [`Memo`], so each cell is resolved exactly once:
//! O(rows * cols) time and space. The traversal keeps its own work stack rather
//! than recursing, so a single path that snakes through the whole grid does not
//! exhaust the thread stack.

use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::memo::{Memo, MemoState};
use crate::traits::IncreasingPathSolver;
use crate::utils::{default_chunk_rows, worker_count};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Longest strictly increasing path solver.
///
/// Typical usage:
/// ```
/// use grid_lip::{Grid, PathFinder};
///
/// let grid = Grid::from_rows(vec![vec![9, 9, 4], vec![6, 6, 8], vec![2, 1, 1]]).unwrap();
/// let finder = PathFinder::new();
/// assert_eq!(finder.longest_increasing_path(&grid), 4);
///
/// let (len, path) = finder.run(&grid);
/// assert_eq!(path.len(), len);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    chunk_rows: Option<usize>,
}

/// One frame of the explicit DFS stack.
struct Frame {
    cell: Cell,
    neighbors: [Option<Cell>; 4],
    next: usize,
    best: usize,
}

impl Frame {
    fn enter<T>(grid: &Grid<T>, cell: Cell) -> Self {
        Self {
            cell,
            neighbors: grid.neighbor_slots(cell),
            next: 0,
            best: 0,
        }
    }
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with an explicit number of rows per parallel chunk.
    ///
    /// # Panics
    /// Panics if `chunk_rows == 0`.
    pub fn with_chunk_rows(chunk_rows: usize) -> Self {
        assert!(chunk_rows > 0, "chunk_rows must be positive");
        Self {
            chunk_rows: Some(chunk_rows),
        }
    }

    /// Rows per parallel work unit for a grid with `rows` rows.
    ///
    /// Defaults to about [`CHUNKS_PER_WORKER`](crate::utils::CHUNKS_PER_WORKER)
    /// chunks per available worker.
    pub fn chunk_rows_for(&self, rows: usize) -> usize {
        self.chunk_rows
            .unwrap_or_else(|| default_chunk_rows(rows, worker_count()))
            .max(1)
    }

    /// Length, in cells, of the longest strictly increasing orthogonal path.
    ///
    /// A fresh memo is allocated for this call and dropped on return.
    pub fn longest_increasing_path<T: Ord>(&self, grid: &Grid<T>) -> usize {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lip_run", rows = grid.rows(), cols = grid.cols());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut memo = Memo::new(grid.rows(), grid.cols());
        let longest = grid
            .cells()
            .map(|cell| Self::best_path_from(grid, &mut memo, cell))
            .max()
            .unwrap_or(1);

        #[cfg(feature = "tracing")]
        tracing::debug!(longest, "longest increasing path resolved");
        longest
    }

    /// Resolve the longest path starting at `start`, filling `memo` for every
    /// cell reachable from it along strictly increasing steps.
    ///
    /// Returns immediately on a memo hit.
    ///
    /// # Panics
    /// Panics if `start` is outside the grid or `memo` was sized for a
    /// different grid.
    pub fn best_path_from<T: Ord>(grid: &Grid<T>, memo: &mut Memo, start: Cell) -> usize {
        assert_eq!(
            memo.shape(),
            (grid.rows(), grid.cols()),
            "memo shape does not match grid"
        );
        assert!(grid.contains(start), "start cell {start:?} out of bounds");
        if let Some(len) = memo.resolved(start) {
            return len;
        }

        memo.mark_in_progress(start);
        let mut stack = vec![Frame::enter(grid, start)];

        while let Some(frame) = stack.last_mut() {
            let mut descend = None;
            while frame.next < frame.neighbors.len() {
                let slot = frame.neighbors[frame.next];
                frame.next += 1;
                let Some(n) = slot else { continue };
                if grid.get(n) <= grid.get(frame.cell) {
                    continue;
                }
                match memo.state(n) {
                    MemoState::Resolved(len) => frame.best = frame.best.max(len),
                    MemoState::Unvisited => {
                        descend = Some(n);
                        break;
                    }
                    // Strict increase rules out cycles, so a neighbor can never
                    // still be on the stack.
                    MemoState::InProgress => {
                        if cfg!(debug_assertions) {
                            unreachable!("increasing step from {:?} revisits {n:?}", frame.cell);
                        }
                    }
                }
            }

            if let Some(n) = descend {
                memo.mark_in_progress(n);
                stack.push(Frame::enter(grid, n));
                continue;
            }

            let (cell, best) = (frame.cell, frame.best);
            stack.pop();
            let len = best + 1;
            memo.resolve(cell, len);
            match stack.last_mut() {
                Some(parent) => parent.best = parent.best.max(len),
                None => return len,
            }
        }

        // The loop only exits through the root frame's return.
        memo.resolved(start).unwrap_or(1)
    }

    /// Longest length together with one path achieving it.
    ///
    /// The path starts at the first cell, in row-major order, whose resolved
    /// length is maximal. Each step takes the first neighbor (up, left, down,
    /// right) that is larger and whose length is exactly one less.
    pub fn run<T: Ord>(&self, grid: &Grid<T>) -> (usize, Vec<Cell>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lip_run_path", rows = grid.rows(), cols = grid.cols());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut memo = Memo::new(grid.rows(), grid.cols());
        let mut longest = 0;
        let mut start = (0, 0);
        for cell in grid.cells() {
            let len = Self::best_path_from(grid, &mut memo, cell);
            if len > longest {
                longest = len;
                start = cell;
            }
        }

        let path = Self::trace_path(grid, &memo, start);
        debug_assert_eq!(path.len(), longest);
        (longest, path)
    }

    /// Follow resolved lengths downhill from `start`.
    fn trace_path<T: Ord>(grid: &Grid<T>, memo: &Memo, start: Cell) -> Vec<Cell> {
        let mut path = vec![start];
        let mut cur = start;
        let mut remaining = memo.resolved(start).unwrap_or(1);
        while remaining > 1 {
            let next = grid.neighbors(cur).find(|&n| {
                grid.get(n) > grid.get(cur) && memo.resolved(n) == Some(remaining - 1)
            });
            match next {
                Some(n) => {
                    path.push(n);
                    cur = n;
                    remaining -= 1;
                }
                None => break,
            }
        }
        path
    }
}

#[cfg(feature = "parallel")]
impl PathFinder {
    /// Parallel variant of [`longest_increasing_path`](Self::longest_increasing_path).
    ///
    /// Starting rows are split into chunks of [`chunk_rows_for`](Self::chunk_rows_for)
    /// rows. Each chunk runs on a rayon worker with its own memo over the shared,
    /// read-only grid; the chunk maxima are combined at the end.
    ///
    /// Memos are not shared, so a cell reachable from several chunks is resolved
    /// once per chunk. Total work is up to `chunks * rows * cols`: on grids with
    /// long increasing paths (a snake through every cell is the worst case) this
    /// can cost more than [`longest_increasing_path`](Self::longest_increasing_path).
    /// Larger chunks via [`with_chunk_rows`](Self::with_chunk_rows) bound the
    /// duplication.
    pub fn longest_increasing_path_par<T: Ord + Sync>(&self, grid: &Grid<T>) -> usize {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("lip_run_par", rows = grid.rows(), cols = grid.cols());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let chunk = self.chunk_rows_for(grid.rows());
        let starts: Vec<usize> = (0..grid.rows()).step_by(chunk).collect();
        let longest = starts
            .into_par_iter()
            .map(|first_row| {
                let last_row = (first_row + chunk).min(grid.rows());
                #[cfg(feature = "tracing")]
                let span = tracing::trace_span!("lip_chunk", first_row, last_row);
                #[cfg(feature = "tracing")]
                let _enter = span.enter();

                let mut memo = Memo::new(grid.rows(), grid.cols());
                (first_row..last_row)
                    .flat_map(|r| (0..grid.cols()).map(move |c| (r, c)))
                    .map(|cell| Self::best_path_from(grid, &mut memo, cell))
                    .max()
                    .unwrap_or(1)
            })
            .max()
            .unwrap_or(1);

        #[cfg(feature = "tracing")]
        tracing::debug!(longest, chunk, "parallel longest increasing path resolved");
        longest
    }
}

impl IncreasingPathSolver for PathFinder {
    fn longest_len<T: Ord>(&self, grid: &Grid<T>) -> usize {
        self.longest_increasing_path(grid)
    }

    fn longest_path<T: Ord>(&self, grid: &Grid<T>) -> Vec<Cell> {
        self.run(grid).1
    }
}

/// Validate nested rows and return the longest strictly increasing path length.
///
/// ```
/// use grid_lip::{longest_increasing_path, GridError};
///
/// assert_eq!(longest_increasing_path(&[vec![1, 2, 3, 4]]), Ok(4));
/// assert_eq!(longest_increasing_path::<i32>(&[]), Err(GridError::Empty));
/// ```
pub fn longest_increasing_path<T: Ord + Clone>(rows: &[Vec<T>]) -> Result<usize, GridError> {
    let grid = Grid::from_rows(rows.to_vec())?;
    Ok(PathFinder::new().longest_increasing_path(&grid))
}

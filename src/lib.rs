//! Longest strictly increasing path in a 2D grid.
//!
//! Given a rectangular grid of ordered values, find the longest sequence of
//! orthogonally adjacent cells whose values strictly increase at every step.
//!
//! ## Core idea
//! 1. Orient each neighbor pair from the smaller value to the larger one. Strict
//!    increase means the resulting graph has no cycles.
//! 2. The longest path starting at a cell is one more than the best of its
//!    larger neighbors, so a depth-first search with a per-cell memo resolves
//!    every cell exactly once.
//! 3. The answer is the maximum over all starting cells.
//!
//! Input is validated once when building a [`Grid`]: empty or ragged rows are
//! rejected with a [`GridError`]. Everything after that is infallible.
//!
//! ## Quick start
//! ```
//! use grid_lip::{Grid, PathFinder};
//!
//! let grid = Grid::from_rows(vec![vec![3, 4, 5], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
//! let (len, path) = PathFinder::new().run(&grid);
//! assert_eq!(len, 4);
//! assert_eq!(path.len(), 4);
//! ```
//!
//! ## Cargo features
//! - `parallel`: [`PathFinder::longest_increasing_path_par`] splits starting
//!   rows across rayon workers, each with a private memo.
//! - `tracing`: spans around each run and parallel chunk.
//! - `heavy`: enables long-running stress tests.

pub mod brute;
pub mod builder;
pub mod error;
pub mod grid;
pub mod memo;
pub mod pathfinder;
pub mod traits;
pub mod utils;

pub use crate::brute::BruteForce;
pub use crate::builder::PathFinderBuilder;
pub use crate::error::GridError;
pub use crate::grid::{Cell, Grid};
pub use crate::pathfinder::{longest_increasing_path, PathFinder};
pub use crate::traits::IncreasingPathSolver;

//! Input validation errors.
//!
//! Every check happens once, when a [`Grid`](crate::grid::Grid) is built.
//! Nothing after construction can fail.

use thiserror::Error;

/// Rejected grid shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows have no columns")]
    EmptyRow,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{rows}x{cols} grid has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("{rows}x{cols} grid needs {expected} values, got {found}")]
    Shape {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::GridError;

    #[test]
    fn ragged_message_names_the_row() {
        let err = GridError::Ragged {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 columns, expected 3");
    }

    #[test]
    fn too_large_message() {
        let err = GridError::TooLarge { rows: 3, cols: 4 };
        assert_eq!(err.to_string(), "3x4 grid has more cells than fit in memory");
    }

    #[test]
    fn shape_message() {
        let err = GridError::Shape {
            rows: 2,
            cols: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "2x2 grid needs 4 values, got 3");
    }
}

//! Per-call memo buffer.
//!
//! Each cell moves through `Unvisited -> InProgress -> Resolved(len)` exactly
//! once. `Resolved` is terminal: a strictly increasing step can never lead back
//! to a cell already on the stack, so resolved lengths are never invalidated.

use crate::grid::Cell;

/// State of one memo slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemoState {
    #[default]
    Unvisited,
    /// On the current traversal stack.
    InProgress,
    /// Longest strictly increasing path starting here, in cells.
    Resolved(usize),
}

/// Memo sized exactly to one grid; owned by a single run.
#[derive(Clone, Debug)]
pub struct Memo {
    rows: usize,
    cols: usize,
    slots: Vec<MemoState>,
}

impl Memo {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            // saturate so an impossible size fails the allocation instead of wrapping
            slots: vec![MemoState::Unvisited; rows.saturating_mul(cols)],
        }
    }

    /// `(rows, cols)` this memo was sized for.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn slot(&self, (r, c): Cell) -> usize {
        r * self.cols + c
    }

    #[inline]
    pub fn state(&self, cell: Cell) -> MemoState {
        self.slots[self.slot(cell)]
    }

    /// Resolved length at `cell`, if any.
    #[inline]
    pub fn resolved(&self, cell: Cell) -> Option<usize> {
        match self.state(cell) {
            MemoState::Resolved(len) => Some(len),
            _ => None,
        }
    }

    #[inline]
    pub fn mark_in_progress(&mut self, cell: Cell) {
        let i = self.slot(cell);
        debug_assert_eq!(self.slots[i], MemoState::Unvisited, "cell {cell:?} entered twice");
        self.slots[i] = MemoState::InProgress;
    }

    #[inline]
    pub fn resolve(&mut self, cell: Cell, len: usize) {
        let i = self.slot(cell);
        debug_assert!(len >= 1, "path lengths count at least the start cell");
        self.slots[i] = MemoState::Resolved(len);
    }

    /// Number of resolved slots.
    pub fn resolved_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, MemoState::Resolved(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Memo, MemoState};

    #[test]
    fn fresh_memo_is_unvisited() {
        let m = Memo::new(2, 3);
        assert_eq!(m.len(), 6);
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_empty());
        assert_eq!(m.state((1, 2)), MemoState::Unvisited);
        assert_eq!(m.resolved((1, 2)), None);
        assert_eq!(m.resolved_count(), 0);
    }

    #[test]
    fn lifecycle_reaches_resolved() {
        let mut m = Memo::new(2, 2);
        m.mark_in_progress((1, 0));
        assert_eq!(m.state((1, 0)), MemoState::InProgress);
        assert_eq!(m.resolved((1, 0)), None);
        m.resolve((1, 0), 3);
        assert_eq!(m.resolved((1, 0)), Some(3));
        assert_eq!(m.resolved_count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "entered twice")]
    fn reentering_is_caught_in_debug() {
        let mut m = Memo::new(1, 1);
        m.mark_in_progress((0, 0));
        m.mark_in_progress((0, 0));
    }
}

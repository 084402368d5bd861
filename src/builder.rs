use crate::PathFinder;

/// Builder for [`PathFinder`] configuration.
///
/// ```
/// use grid_lip::PathFinderBuilder;
///
/// let finder = PathFinderBuilder::new().with_chunk_rows(8).build();
/// assert_eq!(finder.chunk_rows_for(1_000), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathFinderBuilder {
    chunk_rows: Option<usize>,
}

impl PathFinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Rows per parallel chunk. Only consulted with the `parallel` feature.
    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = Some(chunk_rows);
        self
    }
    pub fn build(self) -> PathFinder {
        match self.chunk_rows {
            Some(n) => PathFinder::with_chunk_rows(n),
            None => PathFinder::new(),
        }
    }
}

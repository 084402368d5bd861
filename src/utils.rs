//! Work-splitting helpers for the `parallel` feature.

/// Target number of row chunks handed to each worker.
///
/// Chunks on long-path grids can re-resolve cells another chunk already saw,
/// so this stays small: enough slack to rebalance uneven chunks, no more.
pub const CHUNKS_PER_WORKER: usize = 2;

/// Threads available to the parallel search; 1 without the `parallel` feature.
pub fn worker_count() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

/// Rows per chunk so that `rows` splits into about
/// `workers * CHUNKS_PER_WORKER` chunks. Never zero.
pub fn default_chunk_rows(rows: usize, workers: usize) -> usize {
    let chunks = workers.max(1).saturating_mul(CHUNKS_PER_WORKER);
    rows.div_ceil(chunks).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_worker_gets_two_chunks() {
        assert_eq!(default_chunk_rows(100, 1), 50);
        assert_eq!(default_chunk_rows(101, 1), 51);
    }

    #[test]
    fn more_workers_than_rows_gives_one_row_chunks() {
        assert_eq!(default_chunk_rows(3, 16), 1);
        assert_eq!(default_chunk_rows(0, 4), 1);
    }

    #[test]
    fn zero_workers_treated_as_one() {
        assert_eq!(default_chunk_rows(10, 0), 5);
    }

    #[test]
    fn chunks_cover_every_row() {
        for rows in 1..200 {
            for workers in 1..9 {
                let chunk = default_chunk_rows(rows, workers);
                let n_chunks = rows.div_ceil(chunk);
                assert!(chunk * n_chunks >= rows);
                assert!(n_chunks <= workers * CHUNKS_PER_WORKER, "rows={rows} workers={workers}");
            }
        }
    }

    #[test]
    fn worker_count_is_positive() {
        assert!(worker_count() >= 1);
    }
}

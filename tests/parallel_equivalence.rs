#![cfg(feature = "parallel")]

use grid_lip::{Grid, PathFinder, PathFinderBuilder};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Grid<i32>> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0i32..16, rows * cols)
            .prop_map(move |values| Grid::from_flat(rows, cols, values).unwrap())
    })
}

proptest! {
    #[test]
    fn parallel_matches_sequential(grid in grid_strategy(), chunk in 1usize..6) {
        let sequential = PathFinder::new().longest_increasing_path(&grid);
        let parallel = PathFinderBuilder::new()
            .with_chunk_rows(chunk)
            .build()
            .longest_increasing_path_par(&grid);
        prop_assert_eq!(parallel, sequential);
    }
}

#[test]
fn default_chunking_on_snake() {
    let side = 64usize;
    let values: Vec<i64> = (0..side)
        .flat_map(|r| {
            (0..side).map(move |c| {
                let c = if r % 2 == 0 { c } else { side - 1 - c };
                (r * side + c) as i64
            })
        })
        .collect();
    let grid = Grid::from_flat(side, side, values).unwrap();
    assert_eq!(
        PathFinder::new().longest_increasing_path_par(&grid),
        side * side
    );
}

#[test]
fn one_chunk_per_grid_matches_sequential() {
    // a single chunk resolves each cell once, like the sequential run
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![6, 5, 4], vec![7, 8, 9]]).unwrap();
    let finder = PathFinder::with_chunk_rows(grid.rows());
    assert_eq!(finder.chunk_rows_for(grid.rows()), 3);
    assert_eq!(
        finder.longest_increasing_path_par(&grid),
        PathFinder::new().longest_increasing_path(&grid)
    );
}

use grid_lip::{traits::is_increasing_path, Grid, IncreasingPathSolver, PathFinder};

fn solve(rows: Vec<Vec<i32>>) -> usize {
    let grid = Grid::from_rows(rows).unwrap();
    PathFinder::new().longest_increasing_path(&grid)
}

#[test]
fn single_cell() {
    assert_eq!(solve(vec![vec![5]]), 1);
}

#[test]
fn increasing_row_is_one_path() {
    assert_eq!(solve(vec![vec![1, 2, 3, 4]]), 4);
}

#[test]
fn increasing_column_is_one_path() {
    assert_eq!(solve(vec![vec![4], vec![3], vec![2], vec![1]]), 4);
}

#[test]
fn all_equal_grid() {
    assert_eq!(solve(vec![vec![2, 2], vec![2, 2]]), 1);
}

#[test]
fn demo_grid() {
    // 0 -> 1 -> 4 -> 5 (or 0 -> 3 -> 4 -> 5); 1 and 3 are not adjacent
    let grid = Grid::from_rows(vec![vec![3, 4, 5], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
    let (len, path) = PathFinder::new().run(&grid);
    assert_eq!(len, 4);
    assert_eq!(path, vec![(1, 0), (0, 0), (0, 1), (0, 2)]);
    assert!(is_increasing_path(&grid, &path));
}

#[test]
fn spiral_visits_every_cell() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]).unwrap();
    let (len, path) = PathFinder::new().run(&grid);
    assert_eq!(len, 9);
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(1, 1)));
}

#[test]
fn negative_values_and_extremes() {
    assert_eq!(
        solve(vec![vec![i32::MIN, -1, 0], vec![i32::MAX, i32::MAX, 1]]),
        5
    );
}

#[test]
fn repeated_calls_agree() {
    let grid = Grid::from_rows(vec![vec![9, 9, 4], vec![6, 6, 8], vec![2, 1, 1]]).unwrap();
    let finder = PathFinder::new();
    let first = finder.run(&grid);
    let second = finder.run(&grid);
    assert_eq!(first, second);
    assert_eq!(finder.longest_len(&grid), first.0);
    assert_eq!(finder.longest_path(&grid), first.1);
}

#[test]
fn works_for_non_integer_ordered_values() {
    let grid = Grid::from_rows(vec![vec!["a", "b"], vec!["d", "c"]]).unwrap();
    assert_eq!(PathFinder::new().longest_increasing_path(&grid), 4);
}

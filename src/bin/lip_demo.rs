use std::io::Write;

use grid_lip::{Grid, PathFinder};

fn main() {
    let rows = vec![vec![3, 4, 5], vec![0, 1, 0], vec![0, 0, 0]];
    let grid = match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("lip_demo: {err}");
            std::process::exit(2);
        }
    };
    let ans = PathFinder::new().longest_increasing_path(&grid);

    let mut out = std::io::stdout().lock();
    let _ = write!(out, "{ans}");
    let _ = out.flush();
}

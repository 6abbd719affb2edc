//! The B3/S23 rule: birth on 3 live neighbors, survival on 2 or 3.

use std::iter;

use log::debug;

use crate::traits_and_structs::cell::CellState;
use crate::traits_and_structs::grid::Grid;

/// Compute the next generation into a fresh grid; `grid` is left as is.
///
/// Edges need no special handling since every neighborhood wraps.
pub fn next(grid: &Grid) -> Grid {
    let mut result = blank_like(grid);
    for point in grid.iter_points() {
        let alive_neighbors = grid.alive_neighbors(point);
        // The new grid starts dead, only births and survivors are written.
        if grid.get(point).next_state(alive_neighbors).is_alive() {
            result.mark_alive(point);
        }
    }
    debug!(
        "generation computed: {} -> {} alive",
        grid.population(),
        result.population()
    );
    result
}

/// `grid` followed by each of its successors. Never ends.
pub fn generations(grid: Grid) -> impl Iterator<Item = Grid> {
    iter::successors(Some(grid), |current| Some(next(current)))
}

/// True if no cell of a row-major snapshot is alive.
pub fn is_empty<R: AsRef<[CellState]>>(rows: &[R]) -> bool {
    !rows
        .iter()
        .any(|row| row.as_ref().iter().any(|cell| cell.is_alive()))
}

fn blank_like(grid: &Grid) -> Grid {
    let mut blank = grid.clone();
    blank.clear();
    blank
}

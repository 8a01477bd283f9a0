// step.rs - Next generation on a torus

use crate::grid::Grid;

/// `index + delta` wrapped into `0..len`.
fn wrapped(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Live cells among the eight toroidal neighbours of `(row, col)`.
///
/// Edges wrap onto the opposite edge. On very small grids the same cell can
/// be reached through several offsets and is counted each time; a 1x1 grid
/// sees itself as all eight neighbours.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if grid.is_alive(wrapped(row, dr, rows), wrapped(col, dc, cols)) {
                count += 1;
            }
        }
    }
    count
}

fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Fills `next` with the generation following `current`.
///
/// `next` is resized if it does not match; `current` is never touched.
pub fn step_into(current: &Grid, next: &mut Grid) {
    if next.dimensions() != current.dimensions() {
        *next = current.clone();
    }
    let cols = current.cols();
    for (i, cell) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (i / cols, i % cols);
        *cell = next_state(current.is_alive(row, col), live_neighbors(current, row, col));
    }
}

pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();
    step_into(current, &mut next);
    next
}

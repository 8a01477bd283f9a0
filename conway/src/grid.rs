// grid.rs - Grid types for Conway's Game of Life

use crate::error::{LifeError, Result};

/// Rectangular matrix of cells, row-major. `true` is alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Both dimensions must be at least 1 and their product
    /// must fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0)
            .ok_or(LifeError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Cell state, `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Unchecked read for in-range coordinates.
    pub(crate) fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = alive;
        }
    }

    /// Flips one cell. Returns `false` (and changes nothing) when the
    /// coordinate is outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

/// Double buffer: `current` is what the display may read, `next` is scratch
/// space filled during a step and then swapped in.
#[derive(Clone, Debug)]
pub struct Generations {
    current: Grid,
    next: Grid,
}

impl Generations {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            current: Grid::new(rows, cols)?,
            next: Grid::new(rows, cols)?,
        })
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn next_mut(&mut self) -> &mut Grid {
        &mut self.next
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Computes the next generation into the back buffer and makes it current.
    pub fn advance(&mut self) {
        crate::step::step_into(&self.current, &mut self.next);
        self.swap();
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    /// Reallocates both buffers all-dead at the given size.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<()> {
        *self = Self::new(rows, cols)?;
        Ok(())
    }
}

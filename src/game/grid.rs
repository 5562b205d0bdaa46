use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// Saturates at the `i32` limits; such cells are never on a grid.
    pub fn step(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        Self {
            col: self.col.saturating_add(dcol),
            row: self.row.saturating_add(drow),
        }
    }

    /// True if `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: Cell) -> bool {
        let dcol = self.col.abs_diff(other.col) as u64;
        let drow = self.row.abs_diff(other.row) as u64;
        dcol + drow == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Fixed-size lattice the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
}

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Derive the grid from a window size in pixels.
    ///
    /// Whatever does not divide evenly by `cell_size` is left as margin.
    /// A zero `cell_size` yields an empty grid; config validation rejects it earlier.
    pub fn from_window(width: u32, height: u32, cell_size: u32) -> Self {
        let (cols, rows) = match cell_size {
            0 => (0, 0),
            size => (width / size, height / size),
        };
        Self::new(cols, rows)
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as i64) < self.cols as i64
            && (cell.row as i64) < self.rows as i64
    }

    /// Center cell, rounding toward the origin
    pub fn center(&self) -> Cell {
        Cell::new((self.cols / 2) as i32, (self.rows / 2) as i32)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(col, row)))
    }
}

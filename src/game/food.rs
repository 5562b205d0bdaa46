use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::error::GameError;
use super::grid::{Cell, Grid};

/// Rejected draws tolerated before switching to free-cell enumeration.
pub const MAX_SAMPLING_ATTEMPTS: usize = 1024;

/// Picks food cells uniformly among the cells the snake does not occupy.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    grid: Grid,
    rng: StdRng,
}

impl FoodPlacer {
    /// Placer seeded from OS entropy
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            rng: StdRng::from_entropy(),
        }
    }

    /// Placer with a reproducible sequence of draws
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Place a food cell outside `occupied`.
    ///
    /// Draws uniformly at random and redraws on a hit. After
    /// [`MAX_SAMPLING_ATTEMPTS`] misses it picks uniformly among the free cells
    /// instead, so the call is bounded even on a crowded grid.
    pub fn place(&mut self, occupied: &HashSet<Cell>) -> Result<Cell, GameError> {
        let free = self.free_count(occupied);
        if free == 0 {
            return Err(GameError::GridFull);
        }

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let cell = self.random_cell();
            if !occupied.contains(&cell) {
                debug!(col = cell.col, row = cell.row, "placed food");
                return Ok(cell);
            }
        }

        warn!(
            free,
            attempts = MAX_SAMPLING_ATTEMPTS,
            "food sampling exhausted, enumerating free cells"
        );
        let cell = self.pick_free(occupied).ok_or(GameError::GridFull)?;
        debug!(col = cell.col, row = cell.row, "placed food");
        Ok(cell)
    }

    /// Uniform pick among the free cells, walking the whole grid
    fn pick_free(&mut self, occupied: &HashSet<Cell>) -> Option<Cell> {
        let grid = self.grid;
        grid.cells()
            .filter(|cell| !occupied.contains(cell))
            .choose(&mut self.rng)
    }

    fn random_cell(&mut self) -> Cell {
        let col = self.rng.gen_range(0..self.grid.cols()) as i32;
        let row = self.rng.gen_range(0..self.grid.rows()) as i32;
        Cell::new(col, row)
    }

    /// Free cells left, counting only occupied cells that lie on the grid
    fn free_count(&self, occupied: &HashSet<Cell>) -> usize {
        let inside = occupied
            .iter()
            .filter(|cell| self.grid.in_bounds(**cell))
            .count();
        self.grid.cell_count().saturating_sub(inside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_avoids_occupied() {
        let grid = Grid::new(5, 5);
        let mut placer = FoodPlacer::seeded(grid, 7);
        let occupied: HashSet<Cell> = (0..5).map(|col| Cell::new(col, 2)).collect();

        for _ in 0..200 {
            let cell = placer.place(&occupied).unwrap();
            assert!(grid.in_bounds(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_single_free_cell_is_returned() {
        let grid = Grid::new(4, 3);
        let free = Cell::new(2, 1);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != free).collect();

        for seed in 0..20 {
            let mut placer = FoodPlacer::seeded(grid, seed);
            assert_eq!(placer.place(&occupied), Ok(free));
        }
    }

    #[test]
    fn test_full_grid_is_rejected() {
        let grid = Grid::new(3, 3);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut placer = FoodPlacer::seeded(grid, 1);

        assert_eq!(placer.place(&occupied), Err(GameError::GridFull));
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let mut placer = FoodPlacer::seeded(Grid::new(0, 0), 1);
        assert_eq!(placer.place(&HashSet::new()), Err(GameError::GridFull));
    }

    #[test]
    fn test_off_grid_cells_do_not_count_as_occupied() {
        let grid = Grid::new(1, 1);
        let occupied: HashSet<Cell> = [Cell::new(-1, 0), Cell::new(5, 5)].into_iter().collect();
        let mut placer = FoodPlacer::seeded(grid, 3);

        assert_eq!(placer.place(&occupied), Ok(Cell::new(0, 0)));
    }

    #[test]
    fn test_crowded_large_grid_finds_last_cell() {
        // 90_000 cells with one free: sampling almost always gives up first
        let grid = Grid::new(300, 300);
        let free = Cell::new(123, 77);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != free).collect();

        for seed in 0..5 {
            let mut placer = FoodPlacer::seeded(grid, seed);
            assert_eq!(placer.place(&occupied), Ok(free));
            assert_eq!(placer.pick_free(&occupied), Some(free));
        }
    }

    #[test]
    fn test_pick_free_is_spread_over_free_cells() {
        let grid = Grid::new(4, 4);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| c.row != 3).collect();
        let mut placer = FoodPlacer::seeded(grid, 9);

        let picked: HashSet<Cell> = (0..200)
            .filter_map(|_| placer.pick_free(&occupied))
            .collect();
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|cell| cell.row == 3));
        assert_eq!(placer.pick_free(&grid.cells().collect()), None);
    }

    #[test]
    fn test_seeded_placers_agree() {
        let grid = Grid::new(20, 20);
        let occupied = HashSet::new();
        let mut a = FoodPlacer::seeded(grid, 42);
        let mut b = FoodPlacer::seeded(grid, 42);

        for _ in 0..10 {
            assert_eq!(a.place(&occupied), b.place(&occupied));
        }
    }
}

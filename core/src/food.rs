use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

pub trait FoodPlacer {
    /// Picks a free cell for the next food, or `None` once the snake covers the
    /// whole grid.
    fn place(&mut self, grid: &Grid, snake: &SnakeBody) -> Option<CellIndex>;
}

/// Cells of `grid` not covered by any segment, in index order.
pub fn free_cells(grid: &Grid, snake: &SnakeBody) -> impl Iterator<Item = CellIndex> + use<> {
    let occupied = snake.occupied_cells();
    grid.cells().filter(move |cell| !occupied.contains(cell))
}

/// Uniform placement over the free cells, driven by a seeded RNG so rounds can
/// be replayed.
#[derive(Clone, Debug)]
pub struct RandomFoodPlacer {
    rng: SmallRng,
}

impl RandomFoodPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FoodPlacer for RandomFoodPlacer {
    fn place(&mut self, grid: &Grid, snake: &SnakeBody) -> Option<CellIndex> {
        let free_count = free_cells(grid, snake).count();
        if free_count == 0 {
            log::trace!("No free cell left for food");
            return None;
        }

        // skip over occupied cells to land on the n-th free one
        let pick = self.rng.random_range(0..free_count);
        let cell = free_cells(grid, snake).nth(pick);
        log::trace!("Placed food at {cell:?}, picked {pick} of {free_count} free cells");
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn never_places_on_the_snake() {
        let grid = Grid::new(4);
        let snake = SnakeBody::from_positions(&grid, &[5, 6, 10, 9, 8, 4, 0, 1]).unwrap();

        for seed in 0..64 {
            let mut placer = RandomFoodPlacer::new(seed);
            let cell = placer.place(&grid, &snake).unwrap();
            assert!(!snake.contains(cell), "seed {seed} placed food on {cell}");
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn full_grid_yields_none() {
        let grid = Grid::new(2);
        let snake = SnakeBody::from_positions(&grid, &[0, 1, 3, 2]).unwrap();

        assert_eq!(RandomFoodPlacer::new(7).place(&grid, &snake), None);
        assert_eq!(free_cells(&grid, &snake).count(), 0);
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = Grid::new(3);
        let snake = SnakeBody::from_positions(&grid, &[4, 3, 0, 1]).unwrap();
        let free: Vec<_> = free_cells(&grid, &snake).collect();
        assert_eq!(free, [2, 5, 6, 7, 8]);

        let mut seen = [0u32; 9];
        let mut placer = RandomFoodPlacer::new(99);
        for _ in 0..2000 {
            let cell = placer.place(&grid, &snake).unwrap();
            seen[usize::from(cell)] += 1;
        }
        for cell in free {
            assert!(seen[usize::from(cell)] > 250, "cell {cell} drawn {seen:?}");
        }
        assert_eq!(seen[0] + seen[1] + seen[3] + seen[4], 0);
    }

    #[test]
    fn picks_from_the_shared_free_cell_list() {
        let grid = Grid::new(3);
        let snake = SnakeBody::from_positions(&grid, &[0, 1, 2, 5, 4, 3, 6, 7]).unwrap();

        // a single free cell leaves the RNG nothing to choose
        for seed in 0..8 {
            assert_eq!(RandomFoodPlacer::new(seed).place(&grid, &snake), Some(8));
        }
        assert_eq!(free_cells(&grid, &snake).collect::<Vec<_>>(), [8]);
    }

    #[test]
    fn same_seed_same_sequence() {
        let grid = Grid::new(10);
        let snake = SnakeBody::new(grid.center());
        let mut a = RandomFoodPlacer::new(1234);
        let mut b = RandomFoodPlacer::new(1234);
        for _ in 0..32 {
            assert_eq!(a.place(&grid, &snake), b.place(&grid, &snake));
        }
    }
}

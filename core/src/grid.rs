use core::ops::Range;
use serde::{Deserialize, Serialize};

use crate::*;

/// Arithmetic over a row-major square grid of `size * size` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: Coord,
}

impl Grid {
    pub const fn new(size: Coord) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn cell_count(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn cells(&self) -> Range<CellIndex> {
        0..self.cell_count()
    }

    pub const fn contains(&self, position: CellIndex) -> bool {
        position < self.cell_count()
    }

    pub fn validate_cell(&self, position: CellIndex) -> Result<CellIndex> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    /// Starting cell of a round, the middle row and column. Same as
    /// `floor(size² / 2)` on odd sizes; on even sizes it stays clear of the
    /// left wall.
    pub const fn center(&self) -> CellIndex {
        let half = (self.size / 2) as CellIndex;
        half * self.size as CellIndex + half
    }

    pub const fn row_col(&self, position: CellIndex) -> (Coord, Coord) {
        let size = self.size as CellIndex;
        ((position / size) as Coord, (position % size) as Coord)
    }

    /// Applies the direction's delta without bounds checking; check
    /// [`Grid::is_at_edge`] first.
    pub fn next_position(&self, direction: Direction, position: CellIndex) -> CellIndex {
        debug_assert!(!self.is_at_edge(direction, position));
        let size = CellIndex::from(self.size);
        match direction {
            Direction::Right => position.wrapping_add(1),
            Direction::Left => position.wrapping_sub(1),
            Direction::Up => position.wrapping_sub(size),
            Direction::Down => position.wrapping_add(size),
        }
    }

    /// True when moving `direction` from `position` would leave the grid.
    pub fn is_at_edge(&self, direction: Direction, position: CellIndex) -> bool {
        let size = CellIndex::from(self.size);
        match direction {
            Direction::Right => (position + 1) % size == 0,
            Direction::Left => position % size == 0,
            Direction::Up => position < size,
            Direction::Down => position >= self.cell_count() - size,
        }
    }
}

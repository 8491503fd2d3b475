use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw in one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Empty,
    Food,
    Head,
    Body,
    Digesting,
    Failed,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Empty
    }
}

/// Read-only copy of a round, detached from the engine that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: Coord,
    pub segments: Vec<Segment>,
    pub food: Option<CellIndex>,
    pub direction: Direction,
    pub outcome: RoundOutcome,
    pub ticks: u32,
}

impl GameSnapshot {
    pub fn from_engine<P: FoodPlacer>(engine: &GameEngine<P>) -> Self {
        let state = engine.state();
        Self {
            size: engine.grid().size(),
            segments: state.snake().segments().to_vec(),
            food: state.food(),
            direction: state.direction(),
            outcome: state.outcome(),
            ticks: state.ticks(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The board as `[row, col]` cells.
    pub fn board(&self) -> Array2<CellView> {
        let grid = Grid::new(self.size);
        let side = usize::from(self.size);
        let mut board = Array2::from_elem((side, side), CellView::Empty);
        let mut paint = |position: CellIndex, view: CellView| {
            let (row, col) = grid.row_col(position);
            board[[usize::from(row), usize::from(col)]] = view;
        };

        if let Some(food) = self.food {
            paint(food, CellView::Food);
        }

        // tail first so the head wins on shared cells
        for (i, segment) in self.segments.iter().enumerate().rev() {
            let view = if segment.is_failed {
                CellView::Failed
            } else if i == 0 {
                CellView::Head
            } else if segment.is_digesting {
                CellView::Digesting
            } else {
                CellView::Body
            };
            paint(segment.position, view);
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_paints_food_and_body() {
        let config = GameConfig::new(3).unwrap();
        let engine = GameEngine::with_seed(config, 3).unwrap();
        let snapshot = engine.snapshot();

        let board = snapshot.board();
        assert_eq!(board.dim(), (3, 3));
        assert_eq!(board[[1, 1]], CellView::Head);
        let food = snapshot.food.unwrap();
        let (row, col) = config.grid().row_col(food);
        assert_eq!(board[[usize::from(row), usize::from(col)]], CellView::Food);
        assert_eq!(
            board.iter().filter(|&&cell| cell == CellView::Empty).count(),
            7
        );
    }

    #[test]
    fn failed_segments_stand_out() {
        let config = GameConfig::new(10).unwrap();
        let mut snake = SnakeBody::from_positions(&config.grid(), &[12, 11, 1, 2]).unwrap();
        snake.set_digesting(2, true);
        let state = GameState::new(snake, Some(44), Direction::Left);
        let mut engine = GameEngine::resume(config, state, RandomFoodPlacer::new(0)).unwrap();
        engine.tick(None).unwrap();

        let board = engine.snapshot().board();
        assert_eq!(board[[1, 2]], CellView::Head);
        assert_eq!(board[[1, 1]], CellView::Failed);
        assert_eq!(board[[0, 1]], CellView::Digesting);
        assert_eq!(board[[0, 2]], CellView::Body);
        assert_eq!(board[[4, 4]], CellView::Food);
    }

    #[test]
    fn snapshot_survives_json() {
        let engine = GameEngine::with_seed(GameConfig::default(), 11).unwrap();
        let snapshot = engine.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.len(), 1);
    }
}

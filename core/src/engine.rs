use serde::{Deserialize, Serialize};

use crate::*;

/// Everything that changes during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    snake: SnakeBody,
    food: Option<CellIndex>,
    direction: Direction,
    outcome: RoundOutcome,
    ticks: u32,
}

impl GameState {
    pub fn new(snake: SnakeBody, food: Option<CellIndex>, direction: Direction) -> Self {
        Self {
            snake,
            food,
            direction,
            outcome: RoundOutcome::InProgress,
            ticks: 0,
        }
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> Option<CellIndex> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Checks a state that came from outside the engine, such as a
    /// deserialized save, before any tick relies on it.
    fn validate(&self, grid: &Grid) -> Result<()> {
        let segments = self.snake.segments();
        if segments.is_empty() {
            return Err(GameError::InvalidState);
        }
        for segment in segments {
            grid.validate_cell(segment.position)?;
        }
        if self.snake.occupied_cells().len() != segments.len() {
            return Err(GameError::InvalidState);
        }
        match self.food {
            Some(food) => {
                grid.validate_cell(food)?;
                if self.snake.contains(food) {
                    return Err(GameError::InvalidState);
                }
            }
            // only a won round runs out of food
            None if self.outcome == RoundOutcome::InProgress => {
                return Err(GameError::InvalidState);
            }
            None => {}
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct GameEngine<P = RandomFoodPlacer> {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    placer: P,
}

impl GameEngine<RandomFoodPlacer> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomFoodPlacer::new(seed))
    }
}

impl<P: FoodPlacer> GameEngine<P> {
    /// Starts a round: a lone head in the middle of the grid and the first food.
    pub fn new(config: GameConfig, mut placer: P) -> Result<Self> {
        config.validate()?;
        let grid = config.grid();
        let snake = SnakeBody::new(grid.center());
        let food = placer.place(&grid, &snake);
        log::debug!(
            "New round on {0}x{0} grid, head at {1}, food at {food:?}",
            config.size,
            grid.center()
        );

        Ok(Self {
            config,
            grid,
            state: GameState::new(snake, food, config.initial_direction),
            placer,
        })
    }

    /// Continues a round from an existing state.
    pub fn resume(config: GameConfig, state: GameState, placer: P) -> Result<Self> {
        config.validate()?;
        let grid = config.grid();
        state.validate(&grid)?;

        Ok(Self {
            config,
            grid,
            state,
            placer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn segments(&self) -> &[Segment] {
        self.state.snake.segments()
    }

    pub fn food(&self) -> Option<CellIndex> {
        self.state.food
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.state.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.state.outcome.is_finished()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }

    /// Advances the round by one cell.
    ///
    /// `requested` is the player's latest direction, if any. Walls and the
    /// body end the round with [`RoundOutcome::Lost`], running out of room for
    /// food with [`RoundOutcome::Won`]. Once either is returned, further ticks
    /// fail with [`GameError::AlreadyEnded`] and leave the state untouched.
    pub fn tick(&mut self, requested: Option<Direction>) -> Result<RoundOutcome> {
        self.check_in_progress()?;

        let state = &mut self.state;
        state.ticks += 1;

        if let Some(requested) = requested {
            state.direction = resolve_direction(requested, state.direction, state.snake.len());
        }
        let direction = state.direction;

        if state.snake.grow_if_digesting() {
            log::trace!("Snake grew to {} segments", state.snake.len());
        }

        let head = state.snake.head().position;
        if self.grid.is_at_edge(direction, head) {
            state.snake.mark_failed(0);
            return Ok(self.finish(RoundOutcome::Lost));
        }

        let next = self.grid.next_position(direction, head);
        // checked against the body before it shifts
        if let Some(index) = state.snake.self_collision_at(next) {
            state.snake.mark_failed(index);
            return Ok(self.finish(RoundOutcome::Lost));
        }

        state.snake.advance();

        let eats = state.food == Some(next);
        state.snake.place_head(next, eats);
        if eats {
            state.food = self.placer.place(&self.grid, &state.snake);
            if state.food.is_none() {
                return Ok(self.finish(RoundOutcome::Won));
            }
        }

        Ok(RoundOutcome::InProgress)
    }

    fn finish(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        self.state.outcome = outcome;
        log::debug!(
            "Round ended {outcome:?} after {} ticks with {} segments",
            self.state.ticks,
            self.state.snake.len()
        );
        outcome
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.outcome.is_finished() {
            log::warn!("Tick requested after the round ended");
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

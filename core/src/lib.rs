#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use food::*;
pub use gate::*;
pub use grid::*;
pub use inbox::*;
pub use segment::*;
pub use snake::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod food;
mod gate;
mod grid;
mod inbox;
mod segment;
mod snake;
mod snapshot;
mod types;

pub const MIN_SIZE: Coord = 2;
pub const DEFAULT_SIZE: Coord = 10;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 800;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub initial_direction: Direction,
    /// Cadence the driver should tick at. The engine itself never reads it.
    pub tick_interval_ms: u32,
}

impl GameConfig {
    pub fn new(size: Coord) -> Result<Self> {
        let config = Self {
            size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(GameError::InvalidSize);
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidTickInterval);
        }
        Ok(())
    }

    pub const fn grid(&self) -> Grid {
        Grid::new(self.size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_direction: Direction::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

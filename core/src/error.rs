use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be between 2 and 255")]
    InvalidSize,
    #[error("Unknown direction")]
    UnknownDirection,
    #[error("Tick interval must be at least 1 ms")]
    InvalidTickInterval,
    #[error("Cell is outside the grid")]
    InvalidCell,
    #[error("Saved state is not a reachable round")]
    InvalidState,
    #[error("Round already ended, no new ticks are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

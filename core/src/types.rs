use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of the square grid.
pub type Coord = u8;

/// Count type used for total-cell and segment counts.
pub type CellCount = u16;

/// Row-major index of a cell, `row * size + col`.
pub type CellIndex = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
                | (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
        )
    }

    /// Maps a keyboard key name (as reported by browsers' `KeyboardEvent.code`)
    /// to a direction. Any other key is not a direction request.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            _ => None,
        }
    }

    pub(crate) const fn to_tag(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Up => 3,
            Self::Down => 4,
        }
    }

    pub(crate) const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            3 => Some(Self::Up),
            4 => Some(Self::Down),
            _ => None,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Left
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" | "l" | "L" | "Left" => Ok(Self::Left),
            "right" | "r" | "R" | "Right" => Ok(Self::Right),
            "up" | "u" | "U" | "Up" => Ok(Self::Up),
            "down" | "d" | "D" | "Down" => Ok(Self::Down),
            _ => Err(GameError::UnknownDirection),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// One cell of the snake's body.
///
/// `is_digesting` and `is_failed` are rendering hints; round control flow goes
/// through [`RoundOutcome`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub position: CellIndex,
    /// Just swallowed food; grows the snake once this flag reaches the tail.
    pub is_digesting: bool,
    /// Involved in the collision that ended the round.
    pub is_failed: bool,
}

impl Segment {
    pub const fn new(position: CellIndex) -> Self {
        Self {
            position,
            is_digesting: false,
            is_failed: false,
        }
    }
}

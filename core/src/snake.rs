use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered, never empty sequence of segments. Index 0 is the head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeBody {
    segments: Vec<Segment>,
}

impl SnakeBody {
    pub fn new(head: CellIndex) -> Self {
        let mut segments = Vec::with_capacity(4);
        segments.push(Segment::new(head));
        Self { segments }
    }

    /// Builds a body from head-first positions, rejecting empty input and
    /// cells outside `grid`.
    pub fn from_positions(grid: &Grid, positions: &[CellIndex]) -> Result<Self> {
        if positions.is_empty() {
            return Err(GameError::InvalidCell);
        }
        let segments = positions
            .iter()
            .map(|&position| grid.validate_cell(position).map(Segment::new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn contains(&self, position: CellIndex) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.position == position)
    }

    pub fn occupied_cells(&self) -> BTreeSet<CellIndex> {
        self.segments
            .iter()
            .map(|segment| segment.position)
            .collect()
    }

    /// Index of the first segment sitting on `position`.
    pub fn self_collision_at(&self, position: CellIndex) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.position == position)
    }

    /// Appends a segment on the tail's cell when the tail is digesting.
    ///
    /// Must run before [`SnakeBody::advance`] so the new segment takes part in
    /// the same shift.
    pub fn grow_if_digesting(&mut self) -> bool {
        let last = self.segments.len() - 1;
        let tail = &mut self.segments[last];
        if !tail.is_digesting {
            return false;
        }

        tail.is_digesting = false;
        let grown = Segment::new(tail.position);
        self.segments.push(grown);
        true
    }

    /// Every segment but the head takes its predecessor's pre-shift position
    /// and digesting flag. The head is left for the caller to move.
    pub fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            let ahead = self.segments[i - 1];
            let segment = &mut self.segments[i];
            segment.position = ahead.position;
            segment.is_digesting = ahead.is_digesting;
        }
    }

    pub(crate) fn place_head(&mut self, position: CellIndex, is_digesting: bool) {
        let head = &mut self.segments[0];
        head.position = position;
        head.is_digesting = is_digesting;
    }

    pub(crate) fn mark_failed(&mut self, index: usize) {
        if let Some(segment) = self.segments.get_mut(index) {
            segment.is_failed = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_digesting(&mut self, index: usize, is_digesting: bool) {
        self.segments[index].is_digesting = is_digesting;
    }
}

use core::sync::atomic::{AtomicU8, Ordering};

use crate::*;

const EMPTY: u8 = 0;

/// Single-slot, latest-wins mailbox for the player's requested direction.
///
/// Input handlers overwrite the slot from any thread; the tick driver reads it.
/// Unconsumed requests are replaced, never queued.
#[derive(Debug, Default)]
pub struct DirectionInbox {
    slot: AtomicU8,
}

impl DirectionInbox {
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(EMPTY),
        }
    }

    pub const fn with_direction(direction: Direction) -> Self {
        Self {
            slot: AtomicU8::new(direction.to_tag()),
        }
    }

    pub fn post(&self, direction: Direction) {
        self.slot.store(direction.to_tag(), Ordering::Release);
    }

    /// Posts the direction for a raw key name; other keys are ignored.
    pub fn post_key(&self, key_name: &str) -> bool {
        match Direction::from_key_name(key_name) {
            Some(direction) => {
                self.post(direction);
                true
            }
            None => false,
        }
    }

    /// Last posted direction, left in place for later ticks.
    pub fn latest(&self) -> Option<Direction> {
        Direction::from_tag(self.slot.load(Ordering::Acquire))
    }

    pub fn take(&self) -> Option<Direction> {
        Direction::from_tag(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

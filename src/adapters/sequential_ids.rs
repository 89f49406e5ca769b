//! Monotonic identifier allocation.

use crate::traits::IdGenerator;

/// Hands out strictly increasing ids starting from a given value.
///
/// Unlike timestamp-based ids, two allocations in the same instant can
/// never collide.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a counter whose first id is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}
